#![allow(dead_code)]

use chrono::{DateTime, Utc};
use mfg_domain::{
    Gender, HardwareItemOption, HardwareSet, InsoleOption, MaterialGroup, MaterialReference, Model,
    ModelCategory, ModelDraft, ModelType, PerforationOption, SoleOption, SuperBom, UnitOfMeasure,
};

pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

pub fn material(id: &str) -> MaterialReference {
    MaterialReference::placeholder(id, MaterialGroup::Other, UnitOfMeasure::Piece)
}

/// "SPORT 250": sizes 40-46, default perforation `perforation-none`, default insole
/// `insole-basic` plus an alternative `insole-fleece`, one hardware set and one sole.
pub fn sport_250() -> Model {
    Model {
        id: "sp250".to_owned(),
        uuid: "7d0c5c8e-2d0b-4f7e-9a0c-1f3f5d9b2a11".to_owned(),
        draft: ModelDraft {
            name: "SPORT 250".to_owned(),
            article: "SP-250".to_owned(),
            gender: Gender::Male,
            model_type: ModelType::Sport,
            category: ModelCategory::Sneakers,
            size_min: 40,
            size_max: 46,
            is_active: true,
            retail_price: 7990.0,
            wholesale_price: 5200.0,
            material_cost: Some(1000.0),
            super_bom: SuperBom {
                perforation_options: vec![PerforationOption {
                    id: "perforation-none".to_owned(),
                    name: "Без перфорации".to_owned(),
                    is_default: true,
                    is_active: true,
                    ..PerforationOption::default()
                }],
                insole_options: vec![
                    InsoleOption {
                        id: "insole-basic".to_owned(),
                        name: "Стелька стандарт".to_owned(),
                        is_default: true,
                        is_active: true,
                        ..InsoleOption::default()
                    },
                    InsoleOption {
                        id: "insole-fleece".to_owned(),
                        name: "Флис".to_owned(),
                        is_active: true,
                        ..InsoleOption::default()
                    },
                ],
                hardware_sets: vec![HardwareSet {
                    id: "hardware-basic".to_owned(),
                    name: "Базовый комплект".to_owned(),
                    is_default: true,
                    is_active: true,
                    items: vec![
                        HardwareItemOption {
                            id: "hardware-item-eyelets".to_owned(),
                            name: "Блочки".to_owned(),
                            material_group: MaterialGroup::Hardware,
                            compatible_materials: vec![
                                material("mat-eyelet"),
                                material("mat-eyelet-gold"),
                            ],
                            ..HardwareItemOption::default()
                        },
                        HardwareItemOption {
                            id: "hardware-item-laces".to_owned(),
                            name: "Шнурки".to_owned(),
                            material_group: MaterialGroup::Hardware,
                            compatible_materials: vec![material("mat-laces")],
                            ..HardwareItemOption::default()
                        },
                    ],
                    ..HardwareSet::default()
                }],
            },
            sole_options: vec![SoleOption {
                id: "sole-eva".to_owned(),
                name: "EVA".to_owned(),
                material: MaterialReference::placeholder(
                    "mat-eva",
                    MaterialGroup::Sole,
                    UnitOfMeasure::Pair,
                ),
                size_min: 35,
                size_max: 46,
                is_default: true,
                ..SoleOption::default()
            }],
            ..ModelDraft::default()
        },
        variants: Vec::new(),
        created_at: EPOCH,
        updated_at: EPOCH,
        kpis: Vec::new(),
    }
}

pub fn prices() -> std::collections::HashMap<String, f64> {
    [("mat-eyelet", 12.5), ("mat-laces", 30.0), ("mat-eva", 450.0)]
        .into_iter()
        .map(|(id, price)| (id.to_owned(), price))
        .collect()
}
