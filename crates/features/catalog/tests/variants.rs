mod common;

use common::{EPOCH, prices, sport_250};
use mfg_catalog::form::{variant_form_defaults, variant_from_form_values, variant_to_form_values};
use mfg_catalog::variants::{create_variant, refresh_variant_costs, upsert_variant};
use mfg_catalog::{CatalogError, SequentialIdGenerator};
use mfg_domain::config::CatalogConfig;
use mfg_domain::{ModelVariantDraft, OptionFamily};

fn draft(name: &str) -> ModelVariantDraft {
    ModelVariantDraft { name: name.to_owned(), ..ModelVariantDraft::default() }
}

#[test]
fn first_variant_is_default_and_second_is_not() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let config = CatalogConfig::default();

    let first = create_variant(&mut model, draft("Лето"), EPOCH, &ids, &config).unwrap();
    assert!(first.is_default);
    assert!(first.id.starts_with("variant-0-"));
    assert_eq!(first.model_id, "sp250");

    let second = create_variant(&mut model, draft("Зима"), EPOCH, &ids, &config).unwrap();
    assert!(!second.is_default);
    assert_eq!(model.variants.iter().filter(|v| v.is_default).count(), 1);
}

#[test]
fn form_defaults_preselect_family_defaults() {
    let mut model = sport_250();
    let form = variant_form_defaults(&model);

    assert_eq!(form.is_default, Some(true));
    assert_eq!(form.perforation_option_id.as_deref(), Some("perforation-none"));
    assert_eq!(form.insole_option_id.as_deref(), Some("insole-basic"));
    assert_eq!(form.hardware_set_id.as_deref(), Some("hardware-basic"));
    assert_eq!(form.sole_option_id.as_deref(), Some("sole-eva"));

    let ids = SequentialIdGenerator::default();
    let variant = variant_from_form_values(form, None);
    create_variant(&mut model, variant, EPOCH, &ids, &CatalogConfig::default()).unwrap();
    assert_eq!(variant_form_defaults(&model).is_default, Some(false));
}

#[test]
fn editing_keeps_overrides_that_are_not_on_the_form() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let config = CatalogConfig::default();
    let mut initial = draft("Лето");
    let eyelets = model.super_bom.hardware_sets[0].items[..1].to_vec();
    initial.specification.customized_hardware = eyelets;
    let stored = create_variant(&mut model, initial, EPOCH, &ids, &config).unwrap().clone();

    let mut form = variant_to_form_values(&stored);
    form.insole_option_id = Some("insole-fleece".to_owned());
    let edited = variant_from_form_values(form, Some(&stored));

    assert_eq!(edited.id.as_deref(), Some(stored.id.as_str()));
    assert_eq!(edited.specification.customized_hardware.len(), 1);
    assert_eq!(edited.specification.option_id(OptionFamily::Insole), Some("insole-fleece"));
}

#[test]
fn unresolved_reference_can_be_allowed_by_config() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let mut variant = draft("Старый");
    variant.specification.sole_option_id = Some("sole-removed".to_owned());

    let strict = CatalogConfig::default();
    let refused = create_variant(&mut model, variant.clone(), EPOCH, &ids, &strict);
    assert!(matches!(
        refused,
        Err(CatalogError::UnresolvedOption { family: OptionFamily::Sole, .. })
    ));

    let mut lenient = CatalogConfig::default();
    lenient.variants.reject_unresolved_on_save = false;
    assert!(create_variant(&mut model, variant, EPOCH, &ids, &lenient).is_ok());
}

#[test]
fn upsert_replaces_by_id_and_enforces_single_default() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let config = CatalogConfig::default();
    create_variant(&mut model, draft("A"), EPOCH, &ids, &config).unwrap();
    let mut b = create_variant(&mut model, draft("B"), EPOCH, &ids, &config).unwrap().clone();

    b.name = "B2".to_owned();
    b.is_default = true;
    upsert_variant(&mut model, b, &config).unwrap();

    assert_eq!(model.variants.len(), 2);
    let default = model.default_variant().unwrap();
    assert_eq!(default.name, "B2");
    assert_eq!(model.variants.iter().filter(|v| v.is_default).count(), 1);
}

#[test]
fn refresh_recomputes_every_variant_cost() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let config = CatalogConfig::default();
    create_variant(&mut model, draft("Базовый"), EPOCH, &ids, &config).unwrap();
    let mut no_hardware = draft("Без фурнитуры");
    no_hardware.specification.customized_hardware = vec![mfg_domain::HardwareItemOption {
        name: "Ручной выбор".to_owned(),
        ..Default::default()
    }];
    create_variant(&mut model, no_hardware, EPOCH, &ids, &config).unwrap();

    refresh_variant_costs(&mut model, &prices());

    let costs: Vec<_> = model.variants.iter().map(|v| v.total_material_cost).collect();
    assert_eq!(costs, vec![Some(1492.5), None]);
}

#[test]
fn create_refuses_an_existing_id_and_keeps_the_default() {
    let mut model = sport_250();
    let ids = SequentialIdGenerator::default();
    let config = CatalogConfig::default();
    let first = create_variant(&mut model, draft("A"), EPOCH, &ids, &config).unwrap().id.clone();

    let mut again = draft("B");
    again.id = Some(first.clone());
    let result = create_variant(&mut model, again, EPOCH, &ids, &config);

    assert!(matches!(result, Err(CatalogError::DuplicateVariant { ref id, .. }) if *id == first));
    assert_eq!(model.variants.len(), 1);
    assert_eq!(model.variants[0].name, "A");
    assert!(model.variants[0].is_default);
}

#[test]
fn option_ids_with_colons_can_be_selected() {
    let mut model = sport_250();
    let mut gold = model.super_bom.perforation_options[0].clone();
    gold.id = "perf:gold".to_owned();
    gold.is_default = false;
    model.super_bom.perforation_options.push(gold);
    let ids = SequentialIdGenerator::default();

    let mut variant = draft("Золото");
    variant.specification.perforation_option_id = Some("perf:gold".to_owned());
    let stored = create_variant(&mut model, variant, EPOCH, &ids, &CatalogConfig::default());

    assert_eq!(
        stored.unwrap().specification.option_id(OptionFamily::Perforation),
        Some("perf:gold")
    );
}
