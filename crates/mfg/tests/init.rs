use mfg::domain::config::CatalogConfig;
use mfg::features::catalog::Catalog;

#[test]
fn default_features_register_the_catalog() {
    assert!(mfg::features::is_enabled("catalog"));
    assert!(!mfg::features::is_enabled("licensing"));

    let registry = mfg::init(&CatalogConfig::default()).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get::<Catalog>().is_some());
}

#[test]
fn init_surfaces_slice_errors() {
    let mut config = CatalogConfig::default();
    config.sizing.global_min = 60;

    let err = mfg::init(&config).unwrap_err();
    assert!(err.to_string().contains("global_min"));
}
