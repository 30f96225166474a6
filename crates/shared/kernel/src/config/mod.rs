use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[mfg_derive::mfg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// 1. **Base File**: settings from `path` (any format the `config` crate detects by
///    extension). Defaults to `catalog` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `MFG__`; nested keys use double
///    underscores (`MFG__VALIDATION__FAIL_FAST=true` maps to `validation.fail_fast`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use mfg_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// Environment source used by [`load_config`]: `MFG__` prefix, `__` separator.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix("MFG")
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

/// [`load_config`] with an explicit environment source.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("catalog"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
