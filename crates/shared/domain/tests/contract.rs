use mfg_domain::{
    FamilySet, Gender, Model, ModelVariant, OptionFamily, UnitOfMeasure, VariantStatus,
};
use serde_json::json;

fn model_json() -> serde_json::Value {
    json!({
        "id": "models:sport-250",
        "uuid": "3f6c1f0e-7d1a-4c55-9a53-0c3c2f1b9a10",
        "name": "SPORT 250",
        "article": "SP-250",
        "gender": "MALE",
        "modelType": "SPORT",
        "category": "SNEAKERS",
        "sizeMin": 40,
        "sizeMax": 46,
        "isActive": true,
        "retailPrice": 7990.0,
        "wholesalePrice": 5200.0,
        "materialCost": 1800.0,
        "superBom": {
            "perforationOptions": [
                { "id": "perforation-none", "name": "Без перфорации", "isDefault": true, "isActive": true }
            ],
            "insoleOptions": [
                { "id": "insole-basic", "name": "Стелька стандарт", "isDefault": true, "isActive": true },
                { "id": "insole-fleece", "name": "Флис", "seasonality": "FALL_WINTER", "isActive": true }
            ],
            "hardwareSets": []
        },
        "cuttingParts": [],
        "soleOptions": [{
            "id": "sole-1",
            "name": "EVA",
            "material": { "id": "mat-eva", "code": "EVA-01", "name": "EVA", "group": "SOLE", "unit": "пар" },
            "sizeMin": 35,
            "sizeMax": 46,
            "isDefault": true
        }],
        "variants": [{
            "id": "variant-1",
            "modelId": "models:sport-250",
            "name": "Зима",
            "isDefault": true,
            "status": "ACTIVE",
            "specification": { "insoleOptionId": "insole-fleece" },
            "createdAt": "2026-01-10T08:00:00Z",
            "updatedAt": "2026-01-10T08:00:00Z"
        }],
        "createdAt": "2026-01-10T08:00:00Z",
        "updatedAt": "2026-01-12T09:30:00Z",
        "kpis": [{ "title": "Заказы", "value": 14, "trend": "up" }]
    })
}

#[test]
fn model_deserializes_from_api_contract() {
    let model: Model = serde_json::from_value(model_json()).expect("model deserialize");

    assert_eq!(model.article, "SP-250");
    assert_eq!(model.gender, Gender::Male);
    assert_eq!(model.super_bom.insole_options.len(), 2);
    assert_eq!(model.sole_options[0].material.unit, UnitOfMeasure::Pair);
    assert_eq!(model.default_sole().map(|s| s.id.as_str()), Some("sole-1"));

    let variant: &ModelVariant = model.default_variant().expect("default variant");
    assert_eq!(variant.status, VariantStatus::Active);
    assert_eq!(variant.specification.option_id(OptionFamily::Insole), Some("insole-fleece"));
    assert_eq!(variant.specification.option_id(OptionFamily::Perforation), None);
}

#[test]
fn model_serializes_back_to_camel_case() {
    let model: Model = serde_json::from_value(model_json()).expect("model deserialize");
    let value = serde_json::to_value(&model).expect("model serialize");

    assert_eq!(value["modelType"], "SPORT");
    assert_eq!(value["superBom"]["insoleOptions"][1]["seasonality"], "FALL_WINTER");
    assert_eq!(value["variants"][0]["modelId"], "models:sport-250");
    assert!(value.get("collection").is_none());

    let again: Model = serde_json::from_value(value).expect("model re-deserialize");
    assert_eq!(again, model);
}

#[test]
fn family_set_reports_missing_families() {
    let resolved = FamilySet::from(OptionFamily::Insole) | OptionFamily::Sole.flag();
    let missing: Vec<_> = resolved.missing().collect();
    assert_eq!(missing, vec![OptionFamily::Perforation, OptionFamily::HardwareSet]);
    assert!(!resolved.contains(FamilySet::ALL));
}
