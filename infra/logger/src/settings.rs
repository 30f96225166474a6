use crate::{DEFAULT_MAX_FILES, LevelFilter, LoggerError, Rotation};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Logging section of an application config file.
///
/// ```toml
/// [logging]
/// level = "debug"
/// filter = "mfg_catalog=trace"
/// directory = "logs"
/// rotation = "hourly"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub console: bool,
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    pub max_files: usize,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LoggingSettings {
    /// Parses the configured level name.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(&self.level).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{}': {e}", self.level).into(),
            context: Some("logging.level".into()),
        })
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            filter: None,
            directory: None,
            rotation: LogRotation::Daily,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(value: LogRotation) -> Self {
        match value {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}
