use mfg_logger::{LogRotation, Logger, LoggingSettings};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_with_directory_write_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings = LoggingSettings {
        console: false,
        directory: Some(log_dir.clone()),
        rotation: LogRotation::Never,
        json: true,
        ..LoggingSettings::default()
    };

    let logger = Logger::builder().name("inspector-file").init_with(&settings)?;
    assert!(logger.guard().is_some());

    tracing::info!(model = "SPORT 250", "validated draft");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("SPORT 250"));
    assert!(contents.trim_start().starts_with('{'), "file layer should emit JSON");

    Ok(())
}
