use mfg_derive::api_model;
use mfg_domain::model::default_entry;
use mfg_domain::{
    Model, ModelVariant, ModelVariantDraft, ModelVariantSpecification, OptionEntry, VariantStatus,
};

/// Flat variant form: one selector per SUPER-BOM family.
#[api_model]
#[derive(Default)]
pub struct VariantFormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_default: Option<bool>,
    pub status: Option<VariantStatus>,
    pub perforation_option_id: Option<String>,
    pub insole_option_id: Option<String>,
    pub hardware_set_id: Option<String>,
    pub sole_option_id: Option<String>,
    pub notes: Option<String>,
}

fn default_id<T: OptionEntry>(entries: &[T]) -> Option<String> {
    default_entry(entries).map(|entry| entry.id().to_owned())
}

/// Fresh variant form for `model`: each family preselects its default entry, and the
/// form is flagged default when the model has no variants yet.
pub fn variant_form_defaults(model: &Model) -> VariantFormValues {
    VariantFormValues {
        name: Some(String::new()),
        status: Some(VariantStatus::Active),
        is_default: Some(model.variants.is_empty()),
        perforation_option_id: default_id(&model.super_bom.perforation_options),
        insole_option_id: default_id(&model.super_bom.insole_options),
        hardware_set_id: default_id(&model.super_bom.hardware_sets),
        sole_option_id: model.default_sole().map(|sole| sole.id.clone()),
        ..VariantFormValues::default()
    }
}

pub fn variant_to_form_values(variant: &ModelVariant) -> VariantFormValues {
    let spec = &variant.specification;
    VariantFormValues {
        id: Some(variant.id.clone()),
        name: Some(variant.name.clone()),
        code: variant.code.clone(),
        is_default: Some(variant.is_default),
        status: Some(variant.status),
        perforation_option_id: spec.perforation_option_id.clone(),
        insole_option_id: spec.insole_option_id.clone(),
        hardware_set_id: spec.hardware_set_id.clone(),
        sole_option_id: spec.sole_option_id.clone(),
        notes: spec.notes.clone(),
    }
}

/// Rebuilds a variant draft. Overrides and the computed cost are not on the form; they
/// carry over from `existing` when editing.
pub fn variant_from_form_values(
    values: VariantFormValues,
    existing: Option<&ModelVariant>,
) -> ModelVariantDraft {
    let (customized_cutting_parts, customized_hardware, total_material_cost) = existing
        .map(|variant| {
            (
                variant.specification.customized_cutting_parts.clone(),
                variant.specification.customized_hardware.clone(),
                variant.total_material_cost,
            )
        })
        .unwrap_or_default();

    ModelVariantDraft {
        id: values.id.filter(|id| !id.trim().is_empty()),
        name: values.name.unwrap_or_default(),
        code: values.code,
        is_default: values.is_default.unwrap_or(false),
        status: values.status.unwrap_or_default(),
        specification: ModelVariantSpecification {
            perforation_option_id: values.perforation_option_id,
            insole_option_id: values.insole_option_id,
            hardware_set_id: values.hardware_set_id,
            sole_option_id: values.sole_option_id,
            customized_cutting_parts,
            customized_hardware,
            notes: values.notes,
        },
        total_material_cost,
    }
}
