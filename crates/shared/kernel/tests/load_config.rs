use mfg_kernel::config::{ConfigError, environment, load_config, load_config_with};
use mfg_kernel::domain::config::{CatalogConfig, IdStrategy};
use std::collections::HashMap;
use std::io::Write;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_catalog_config_from_toml() {
    let file = write_toml("[ids]\nstrategy = \"sequential\"\n\n[sizing]\ndefault_min = 37\n");

    let config: CatalogConfig = load_config(Some(file.path())).unwrap();
    assert_eq!(config.ids.strategy, IdStrategy::Sequential);
    assert_eq!(config.sizing.default_min, 37);
    assert_eq!(config.sizing.default_max, 45);
}

#[test]
fn environment_overrides_file_values() {
    let file = write_toml("[validation]\nfail_fast = false\n");
    let vars = HashMap::from([("MFG__VALIDATION__FAIL_FAST".to_owned(), "true".to_owned())]);

    let config: CatalogConfig =
        load_config_with(Some(file.path()), environment().source(Some(vars))).unwrap();
    assert!(config.validation.fail_fast);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<CatalogConfig, _> = load_config(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}
