use crate::ids::IdGenerator;
use mfg_derive::api_model;
use mfg_domain::config::CatalogConfig;
use mfg_domain::constants::{
    CUTTING_PREFIX, HARDWARE_ITEM_PREFIX, HARDWARE_SET_PREFIX, INSOLE_PREFIX, PERFORATION_PREFIX,
    SOLE_PREFIX,
};
use mfg_domain::{
    CuttingPartUsage, Gender, HardwareItemOption, HardwareSet, InsoleOption, LacingType,
    MaterialGroup, MaterialReference, ModelCategory, ModelDraft, ModelType, PerforationOption,
    ReferenceItem, Season, SoleOption, SuperBom, UnitOfMeasure,
};

#[api_model]
#[derive(Default)]
pub struct PerforationFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub preview_image: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}

#[api_model]
#[derive(Default)]
pub struct InsoleFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub material: Option<String>,
    pub seasonality: Option<Season>,
    pub thickness_mm: Option<f64>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}

#[api_model]
#[derive(Default)]
pub struct HardwareItemFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub material_group: Option<MaterialGroup>,
    /// Material ids.
    #[serde(default)]
    pub compatible_materials: Vec<String>,
    pub requires_exact_selection: Option<bool>,
    pub notes: Option<String>,
}

#[api_model]
#[derive(Default)]
pub struct HardwareSetFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub items: Vec<HardwareItemFormValues>,
}

#[api_model]
#[derive(Default)]
pub struct SuperBomFormValues {
    #[serde(default)]
    pub perforation_options: Vec<PerforationFormValues>,
    #[serde(default)]
    pub insole_options: Vec<InsoleFormValues>,
    #[serde(default)]
    pub hardware_sets: Vec<HardwareSetFormValues>,
}

#[api_model]
#[derive(Default)]
pub struct CuttingPartFormValues {
    pub id: Option<String>,
    pub part_id: Option<String>,
    pub material_id: Option<String>,
    pub quantity: Option<u8>,
    pub consumption_per_pair: Option<f64>,
    pub labor_cost: Option<f64>,
    pub notes: Option<String>,
}

#[api_model]
#[derive(Default)]
pub struct SoleFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub material_id: Option<String>,
    pub size_min: Option<u8>,
    pub size_max: Option<u8>,
    pub is_default: Option<bool>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

/// Flat, fully optional model form.
#[api_model]
#[derive(Default)]
pub struct ModelFormValues {
    pub name: Option<String>,
    pub article: Option<String>,
    pub gender: Option<Gender>,
    pub model_type: Option<ModelType>,
    pub category: Option<ModelCategory>,
    pub collection: Option<String>,
    pub season: Option<Season>,
    pub last_code: Option<String>,
    pub last_type: Option<String>,
    pub size_min: Option<u8>,
    pub size_max: Option<u8>,
    pub lacing_type: Option<LacingType>,
    pub default_sole_option_id: Option<String>,
    pub is_active: Option<bool>,
    pub retail_price: Option<f64>,
    pub wholesale_price: Option<f64>,
    pub material_cost: Option<f64>,
    pub labor_cost: Option<f64>,
    pub overhead_cost: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub super_bom: SuperBomFormValues,
    #[serde(default)]
    pub cutting_parts: Vec<CuttingPartFormValues>,
    #[serde(default)]
    pub sole_options: Vec<SoleFormValues>,
    pub notes: Option<String>,
}

/// Projects a draft into form values, or defaults a fresh form when `draft` is `None`.
///
/// Fresh forms start active with the configured size range, zero prices and one default
/// entry in each SUPER-BOM collection.
pub fn model_to_form_values(
    draft: Option<&ModelDraft>,
    config: &CatalogConfig,
    ids: &dyn IdGenerator,
) -> ModelFormValues {
    let Some(draft) = draft else {
        return fresh_form(config, ids);
    };

    ModelFormValues {
        name: Some(draft.name.clone()),
        article: Some(draft.article.clone()),
        gender: Some(draft.gender),
        model_type: Some(draft.model_type),
        category: Some(draft.category),
        collection: draft.collection.clone(),
        season: draft.season,
        last_code: draft.last_code.clone(),
        last_type: draft.last_type.clone(),
        size_min: Some(draft.size_min),
        size_max: Some(draft.size_max),
        lacing_type: draft.lacing_type,
        default_sole_option_id: draft.default_sole_option_id.clone(),
        is_active: Some(draft.is_active),
        retail_price: Some(draft.retail_price),
        wholesale_price: Some(draft.wholesale_price),
        material_cost: draft.material_cost,
        labor_cost: draft.labor_cost,
        overhead_cost: draft.overhead_cost,
        description: draft.description.clone(),
        super_bom: SuperBomFormValues {
            perforation_options: draft
                .super_bom
                .perforation_options
                .iter()
                .map(|option| PerforationFormValues {
                    id: Some(option.id.clone()),
                    name: Some(option.name.clone()),
                    code: option.code.clone(),
                    description: option.description.clone(),
                    preview_image: option.preview_image.clone(),
                    is_default: Some(option.is_default),
                    is_active: Some(option.is_active),
                })
                .collect(),
            insole_options: draft
                .super_bom
                .insole_options
                .iter()
                .map(|option| InsoleFormValues {
                    id: Some(option.id.clone()),
                    name: Some(option.name.clone()),
                    material: option.material.clone(),
                    seasonality: option.seasonality,
                    thickness_mm: option.thickness_mm,
                    is_default: Some(option.is_default),
                    is_active: Some(option.is_active),
                })
                .collect(),
            hardware_sets: draft.super_bom.hardware_sets.iter().map(hardware_set_form).collect(),
        },
        cutting_parts: draft
            .cutting_parts
            .iter()
            .map(|usage| CuttingPartFormValues {
                id: Some(usage.id.clone()),
                part_id: Some(usage.part.id.clone()),
                material_id: Some(usage.material.id.clone()),
                quantity: Some(usage.quantity),
                consumption_per_pair: usage.consumption_per_pair,
                labor_cost: usage.labor_cost,
                notes: usage.notes.clone(),
            })
            .collect(),
        sole_options: draft
            .sole_options
            .iter()
            .map(|sole| SoleFormValues {
                id: Some(sole.id.clone()),
                name: Some(sole.name.clone()),
                material_id: Some(sole.material.id.clone()),
                size_min: Some(sole.size_min),
                size_max: Some(sole.size_max),
                is_default: Some(sole.is_default),
                color: sole.color.clone(),
                notes: sole.notes.clone(),
            })
            .collect(),
        notes: draft.notes.clone(),
    }
}

fn hardware_set_form(set: &HardwareSet) -> HardwareSetFormValues {
    HardwareSetFormValues {
        id: Some(set.id.clone()),
        name: Some(set.name.clone()),
        description: set.description.clone(),
        is_default: Some(set.is_default),
        is_active: Some(set.is_active),
        items: set
            .items
            .iter()
            .map(|item| HardwareItemFormValues {
                id: Some(item.id.clone()),
                name: Some(item.name.clone()),
                material_group: Some(item.material_group),
                compatible_materials: item
                    .compatible_materials
                    .iter()
                    .map(|material| material.id.clone())
                    .collect(),
                requires_exact_selection: Some(item.requires_exact_selection),
                notes: item.notes.clone(),
            })
            .collect(),
    }
}

fn fresh_form(config: &CatalogConfig, ids: &dyn IdGenerator) -> ModelFormValues {
    let labels = &config.defaults;
    ModelFormValues {
        is_active: Some(true),
        size_min: Some(config.sizing.default_min),
        size_max: Some(config.sizing.default_max),
        retail_price: Some(0.0),
        wholesale_price: Some(0.0),
        super_bom: SuperBomFormValues {
            perforation_options: vec![PerforationFormValues {
                id: Some(ids.entry_id(PERFORATION_PREFIX, 0)),
                name: Some(labels.perforation_label.clone()),
                is_default: Some(true),
                is_active: Some(true),
                ..PerforationFormValues::default()
            }],
            insole_options: vec![InsoleFormValues {
                id: Some(ids.entry_id(INSOLE_PREFIX, 0)),
                name: Some(labels.insole_label.clone()),
                is_default: Some(true),
                is_active: Some(true),
                ..InsoleFormValues::default()
            }],
            hardware_sets: vec![HardwareSetFormValues {
                id: Some(ids.entry_id(HARDWARE_SET_PREFIX, 0)),
                name: Some(labels.hardware_label.clone()),
                is_default: Some(true),
                is_active: Some(true),
                ..HardwareSetFormValues::default()
            }],
        },
        ..ModelFormValues::default()
    }
}

/// Keeps an authored id, or synthesizes one for a new entry.
fn entry_id(id: Option<String>, prefix: &str, index: usize, ids: &dyn IdGenerator) -> String {
    id.filter(|id| !id.trim().is_empty()).unwrap_or_else(|| ids.entry_id(prefix, index))
}

/// Rebuilds a nested draft from form values.
///
/// References come back as id-only placeholders; see [`crate::lookup::hydrate_references`].
pub fn model_from_form_values(
    values: ModelFormValues,
    config: &CatalogConfig,
    ids: &dyn IdGenerator,
) -> ModelDraft {
    let sizing = &config.sizing;
    let super_bom = values.super_bom;

    ModelDraft {
        name: values.name.unwrap_or_default(),
        article: values.article.unwrap_or_default(),
        gender: values.gender.unwrap_or_default(),
        model_type: values.model_type.unwrap_or_default(),
        category: values.category.unwrap_or_default(),
        collection: values.collection,
        season: values.season,
        last_code: values.last_code,
        last_type: values.last_type,
        size_min: values.size_min.unwrap_or(sizing.default_min),
        size_max: values.size_max.unwrap_or(sizing.default_max),
        lacing_type: values.lacing_type,
        default_sole_option_id: values.default_sole_option_id,
        is_active: values.is_active.unwrap_or(true),
        retail_price: values.retail_price.unwrap_or(0.0),
        wholesale_price: values.wholesale_price.unwrap_or(0.0),
        material_cost: values.material_cost,
        labor_cost: values.labor_cost,
        overhead_cost: values.overhead_cost,
        description: values.description,
        super_bom: SuperBom {
            perforation_options: super_bom
                .perforation_options
                .into_iter()
                .enumerate()
                .map(|(index, option)| PerforationOption {
                    id: entry_id(option.id, PERFORATION_PREFIX, index, ids),
                    name: option.name.unwrap_or_default(),
                    code: option.code,
                    description: option.description,
                    preview_image: option.preview_image,
                    is_default: option.is_default.unwrap_or(false),
                    is_active: option.is_active.unwrap_or(true),
                })
                .collect(),
            insole_options: super_bom
                .insole_options
                .into_iter()
                .enumerate()
                .map(|(index, option)| InsoleOption {
                    id: entry_id(option.id, INSOLE_PREFIX, index, ids),
                    name: option.name.unwrap_or_default(),
                    material: option.material,
                    seasonality: option.seasonality,
                    thickness_mm: option.thickness_mm,
                    is_default: option.is_default.unwrap_or(false),
                    is_active: option.is_active.unwrap_or(true),
                })
                .collect(),
            hardware_sets: super_bom
                .hardware_sets
                .into_iter()
                .enumerate()
                .map(|(index, set)| hardware_set_draft(set, index, ids))
                .collect(),
        },
        cutting_parts: values
            .cutting_parts
            .into_iter()
            .enumerate()
            .map(|(index, entry)| CuttingPartUsage {
                id: entry_id(entry.id, CUTTING_PREFIX, index, ids),
                part: ReferenceItem::cutting_part(entry.part_id.unwrap_or_default()),
                material: MaterialReference::placeholder(
                    entry.material_id.unwrap_or_default(),
                    MaterialGroup::Other,
                    UnitOfMeasure::Piece,
                ),
                quantity: entry.quantity.unwrap_or(0),
                consumption_per_pair: entry.consumption_per_pair,
                labor_cost: entry.labor_cost,
                notes: entry.notes,
            })
            .collect(),
        sole_options: values
            .sole_options
            .into_iter()
            .enumerate()
            .map(|(index, option)| SoleOption {
                id: entry_id(option.id, SOLE_PREFIX, index, ids),
                name: option.name.unwrap_or_default(),
                material: MaterialReference::placeholder(
                    option.material_id.unwrap_or_default(),
                    MaterialGroup::Sole,
                    UnitOfMeasure::Pair,
                ),
                size_min: option.size_min.unwrap_or(sizing.sole_default_min),
                size_max: option.size_max.unwrap_or(sizing.sole_default_max),
                is_default: option.is_default.unwrap_or(false),
                color: option.color,
                notes: option.notes,
            })
            .collect(),
        notes: values.notes,
        attachments: Vec::new(),
    }
}

fn hardware_set_draft(
    set: HardwareSetFormValues,
    index: usize,
    ids: &dyn IdGenerator,
) -> HardwareSet {
    HardwareSet {
        id: entry_id(set.id, HARDWARE_SET_PREFIX, index, ids),
        name: set.name.unwrap_or_default(),
        description: set.description,
        is_default: set.is_default.unwrap_or(false),
        is_active: set.is_active.unwrap_or(true),
        items: set
            .items
            .into_iter()
            .enumerate()
            .map(|(item_index, item)| HardwareItemOption {
                id: entry_id(item.id, HARDWARE_ITEM_PREFIX, item_index, ids),
                name: item.name.unwrap_or_default(),
                material_group: item.material_group.unwrap_or(MaterialGroup::Hardware),
                compatible_materials: item
                    .compatible_materials
                    .into_iter()
                    .map(|id| {
                        let (group, unit) = (MaterialGroup::Other, UnitOfMeasure::Piece);
                        MaterialReference::placeholder(id, group, unit)
                    })
                    .collect(),
                requires_exact_selection: item.requires_exact_selection.unwrap_or(false),
                notes: item.notes,
            })
            .collect(),
    }
}
