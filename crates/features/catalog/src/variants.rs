//! Variant book-keeping on a persisted model.
//!
//! At most one variant of a model is the default: every operation that sets the flag
//! clears it on the siblings in the same call.

use crate::error::CatalogError;
use crate::ids::IdGenerator;
use crate::pricing::{PriceTable, estimate_cost};
use crate::resolver::resolve;
use chrono::{DateTime, Utc};
use mfg_domain::config::CatalogConfig;
use mfg_domain::constants::VARIANT_PREFIX;
use mfg_domain::model::find_entry;
use mfg_domain::{
    Model, ModelVariant, ModelVariantDraft, ModelVariantSpecification, OptionEntry, OptionFamily,
};
use mfg_kernel::security::scope::{ScopedId, ScopedIdError};
use tracing::{debug, info, instrument};

/// Rejects a specification that names a missing or inactive option of `model`.
///
/// # Errors
/// [`CatalogError::Scope`] for an id scoped to another model,
/// [`CatalogError::UnresolvedOption`] for an id absent from the model.
pub fn check_references(
    model: &Model,
    spec: &ModelVariantSpecification,
) -> Result<(), CatalogError> {
    fn active<T: OptionEntry>(
        entries: &[T],
        raw: &str,
        model_id: &str,
    ) -> Result<bool, ScopedIdError> {
        let known = |id: &str| find_entry(entries, id).is_some();
        let local = ScopedId::verify_known(raw, model_id, known)?;
        Ok(find_entry(entries, local).is_some_and(OptionEntry::is_active))
    }

    for family in OptionFamily::ALL {
        let Some(raw) = spec.option_id(family) else {
            continue;
        };
        let found = match family {
            OptionFamily::Perforation => {
                active(&model.super_bom.perforation_options, raw, &model.id)?
            },
            OptionFamily::Insole => active(&model.super_bom.insole_options, raw, &model.id)?,
            OptionFamily::HardwareSet => active(&model.super_bom.hardware_sets, raw, &model.id)?,
            OptionFamily::Sole => active(&model.sole_options, raw, &model.id)?,
        };
        if !found {
            return Err(CatalogError::UnresolvedOption {
                family,
                id: raw.to_owned(),
                context: Some(family.specification_field().into()),
            });
        }
    }
    Ok(())
}

fn clear_other_defaults(model: &mut Model, keep: &str) {
    for variant in model.variants.iter_mut().filter(|variant| variant.id != keep) {
        variant.is_default = false;
    }
}

/// Adds a new variant built from `draft`.
///
/// The first variant of a model is always the default. A new default clears the
/// flag on every sibling. Replacing an existing variant goes through [`upsert_variant`].
///
/// # Errors
/// [`CatalogError::DuplicateVariant`] when `draft.id` names an existing variant, plus
/// [`check_references`] errors with `variants.reject_unresolved_on_save`.
#[instrument(skip_all, fields(model = %model.id))]
pub fn create_variant<'m>(
    model: &'m mut Model,
    draft: ModelVariantDraft,
    now: DateTime<Utc>,
    ids: &dyn IdGenerator,
    config: &CatalogConfig,
) -> Result<&'m ModelVariant, CatalogError> {
    if let Some(id) = draft.id.as_deref()
        && model.variants.iter().any(|variant| variant.id == id)
    {
        return Err(CatalogError::DuplicateVariant {
            id: id.to_owned(),
            context: Some("Use upsert to replace a variant".into()),
        });
    }
    if config.variants.reject_unresolved_on_save {
        check_references(model, &draft.specification)?;
    }

    let id = draft
        .id
        .unwrap_or_else(|| ids.entry_id(VARIANT_PREFIX, model.variants.len()));
    let variant = ModelVariant {
        is_default: draft.is_default || model.variants.is_empty(),
        id,
        model_id: model.id.clone(),
        name: draft.name,
        code: draft.code,
        status: draft.status,
        specification: draft.specification,
        total_material_cost: draft.total_material_cost,
        created_at: now,
        updated_at: now,
    };
    info!(variant = %variant.id, is_default = variant.is_default, "Variant created");
    upsert(model, variant)
}

/// Inserts `variant` or replaces the variant with the same id.
///
/// # Errors
/// [`CatalogError::ForeignVariant`] when the variant belongs to another model, plus
/// [`check_references`] errors with `variants.reject_unresolved_on_save`.
#[instrument(skip_all, fields(model = %model.id, variant = %variant.id))]
pub fn upsert_variant<'m>(
    model: &'m mut Model,
    mut variant: ModelVariant,
    config: &CatalogConfig,
) -> Result<&'m ModelVariant, CatalogError> {
    if variant.model_id != model.id {
        return Err(CatalogError::ForeignVariant {
            expected: model.id.clone(),
            found: variant.model_id,
            context: Some(format!("Saving variant '{}'", variant.id).into()),
        });
    }
    if config.variants.reject_unresolved_on_save {
        check_references(model, &variant.specification)?;
    }
    if model.variants.is_empty() {
        variant.is_default = true;
    }
    upsert(model, variant)
}

fn upsert(model: &mut Model, variant: ModelVariant) -> Result<&ModelVariant, CatalogError> {
    let id = variant.id.clone();
    if variant.is_default {
        clear_other_defaults(model, &id);
    }

    let index = match model.variants.iter().position(|existing| existing.id == id) {
        Some(index) => {
            debug!(variant = %id, "Replacing variant");
            model.variants[index] = variant;
            index
        },
        None => {
            model.variants.push(variant);
            model.variants.len() - 1
        },
    };
    model.variants.get(index).ok_or_else(|| "Variant vanished after upsert".into())
}

/// Makes `id` the only default variant.
///
/// # Errors
/// [`CatalogError::VariantNotFound`] when the model has no such variant.
pub fn set_default_variant(model: &mut Model, id: &str) -> Result<(), CatalogError> {
    let variant = model.variants.iter_mut().find(|variant| variant.id == id).ok_or_else(|| {
        CatalogError::VariantNotFound { id: id.to_owned(), context: Some("Setting default".into()) }
    })?;
    variant.is_default = true;
    clear_other_defaults(model, id);
    Ok(())
}

/// Removes a variant. Removing the default promotes no other variant.
///
/// # Errors
/// [`CatalogError::VariantNotFound`] when the model has no such variant.
pub fn delete_variant(model: &mut Model, id: &str) -> Result<ModelVariant, CatalogError> {
    let index = model.variants.iter().position(|variant| variant.id == id).ok_or_else(|| {
        CatalogError::VariantNotFound {
            id: id.to_owned(),
            context: Some("Deleting variant".into()),
        }
    })?;
    Ok(model.variants.remove(index))
}

/// Recomputes `totalMaterialCost` of every variant; `None` when not computable.
#[instrument(skip_all, fields(model = %model.id))]
pub fn refresh_variant_costs(model: &mut Model, prices: &impl PriceTable) {
    let snapshot: &Model = model;
    let costs: Vec<Option<f64>> = snapshot
        .variants
        .iter()
        .map(|variant| estimate_cost(&resolve(snapshot, &variant.specification), prices))
        .collect();

    for (variant, cost) in model.variants.iter_mut().zip(costs) {
        variant.total_material_cost = cost;
    }
    debug!(variants = model.variants.len(), "Variant costs refreshed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use mfg_domain::{ModelDraft, PerforationOption, VariantStatus};

    const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

    fn model() -> Model {
        Model {
            id: "sp250".to_owned(),
            uuid: "uuid".to_owned(),
            draft: ModelDraft {
                name: "SPORT 250".to_owned(),
                article: "SP-250".to_owned(),
                super_bom: mfg_domain::SuperBom {
                    perforation_options: vec![
                        PerforationOption {
                            id: "perforation-none".to_owned(),
                            name: "Без перфорации".to_owned(),
                            is_default: true,
                            is_active: true,
                            ..Default::default()
                        },
                        PerforationOption {
                            id: "perforation-old".to_owned(),
                            name: "Снята".to_owned(),
                            is_active: false,
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
                ..ModelDraft::default()
            },
            variants: Vec::new(),
            created_at: EPOCH,
            updated_at: EPOCH,
            kpis: Vec::new(),
        }
    }

    fn named(name: &str) -> ModelVariantDraft {
        ModelVariantDraft { name: name.to_owned(), ..ModelVariantDraft::default() }
    }

    #[test]
    fn new_default_clears_previous_default() {
        let mut model = model();
        let ids = SequentialIdGenerator::default();
        let config = CatalogConfig::default();

        create_variant(&mut model, named("A"), EPOCH, &ids, &config).unwrap();
        let b = ModelVariantDraft { is_default: true, ..named("B") };
        create_variant(&mut model, b, EPOCH, &ids, &config).unwrap();

        let defaults: Vec<_> =
            model.variants.iter().filter(|v| v.is_default).map(|v| v.name.as_str()).collect();
        assert_eq!(defaults, vec!["B"]);
    }

    #[test]
    fn inactive_reference_is_rejected_on_save() {
        let mut model = model();
        let mut draft = named("A");
        draft.specification.perforation_option_id = Some("perforation-old".to_owned());

        let err = create_variant(
            &mut model,
            draft,
            EPOCH,
            &SequentialIdGenerator::default(),
            &CatalogConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnresolvedOption { family: OptionFamily::Perforation, .. }
        ));
        assert!(model.variants.is_empty());
    }

    #[test]
    fn foreign_scoped_reference_is_a_scope_error() {
        let model = model();
        let spec = ModelVariantSpecification {
            perforation_option_id: Some("sp300:perforation-none".to_owned()),
            ..Default::default()
        };
        assert!(matches!(check_references(&model, &spec), Err(CatalogError::Scope { .. })));
    }

    #[test]
    fn foreign_variant_is_refused() {
        let mut model = model();
        let variant = ModelVariant {
            id: "variant-x".to_owned(),
            model_id: "sp300".to_owned(),
            name: "X".to_owned(),
            code: None,
            is_default: false,
            status: VariantStatus::Active,
            specification: ModelVariantSpecification::default(),
            total_material_cost: None,
            created_at: EPOCH,
            updated_at: EPOCH,
        };
        let err = upsert_variant(&mut model, variant, &CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, CatalogError::ForeignVariant { .. }));
    }

    #[test]
    fn deleting_default_promotes_nothing() {
        let mut model = model();
        let ids = SequentialIdGenerator::default();
        let config = CatalogConfig::default();
        let first = create_variant(&mut model, named("A"), EPOCH, &ids, &config)
            .unwrap()
            .id
            .clone();
        create_variant(&mut model, named("B"), EPOCH, &ids, &config).unwrap();

        let removed = delete_variant(&mut model, &first).unwrap();
        assert!(removed.is_default);
        assert!(model.default_variant().is_none());
        assert!(matches!(
            delete_variant(&mut model, &first),
            Err(CatalogError::VariantNotFound { .. })
        ));
    }

    #[test]
    fn set_default_moves_the_flag() {
        let mut model = model();
        let ids = SequentialIdGenerator::default();
        let config = CatalogConfig::default();
        create_variant(&mut model, named("A"), EPOCH, &ids, &config).unwrap();
        let second = create_variant(&mut model, named("B"), EPOCH, &ids, &config)
            .unwrap()
            .id
            .clone();

        set_default_variant(&mut model, &second).unwrap();
        assert_eq!(model.default_variant().map(|v| v.id.as_str()), Some(second.as_str()));
        assert_eq!(model.variants.iter().filter(|v| v.is_default).count(), 1);
    }
}
