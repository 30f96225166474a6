//! # Variant Resolution
//!
//! Turns a variant specification into the effective configuration of a model: one
//! entry per SUPER-BOM family, plus the cutting parts and hardware items that apply.
//!
//! For each family an explicit id wins when it names an active entry of the same model.
//! Otherwise the family falls back to its active default, and an explicit id that could
//! not be honored is recorded as an [`Advisory`]. Resolution is a pure read.

use crate::error::CatalogError;
use mfg_domain::model::{default_entry, find_entry};
use mfg_domain::{
    CuttingPartUsage, FamilySet, HardwareItemOption, HardwareSet, InsoleOption, Model,
    ModelVariant, ModelVariantSpecification, OptionEntry, OptionFamily, PerforationOption,
    SoleOption,
};
use mfg_kernel::security::scope::{ScopedId, ScopedIdError};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Non-blocking findings of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    /// The id names no active entry of the model's current SUPER-BOM.
    UnresolvedVariantOption { family: OptionFamily, id: String },
    /// The id is scoped to another model.
    ForeignReference { family: OptionFamily, id: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedVariantOption { family, id } => {
                write!(f, "{family} option '{id}' is missing or inactive; default used")
            },
            Self::ForeignReference { family, id } => {
                write!(f, "{family} option '{id}' belongs to another model; default used")
            },
        }
    }
}

/// What a variant actually consists of.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfiguration<'a> {
    pub perforation: Option<&'a PerforationOption>,
    pub insole: Option<&'a InsoleOption>,
    pub hardware_set: Option<&'a HardwareSet>,
    pub sole: Option<&'a SoleOption>,
    /// The variant override when non-empty, otherwise the model's list.
    pub cutting_parts: &'a [CuttingPartUsage],
    /// `customizedHardware` when non-empty, otherwise the chosen set's items.
    pub hardware_items: &'a [HardwareItemOption],
    /// Model-level material cost baseline.
    pub material_cost: Option<f64>,
    #[serde(skip)]
    pub resolved: FamilySet,
    pub advisories: Vec<Advisory>,
}

impl EffectiveConfiguration<'_> {
    #[must_use]
    pub const fn is_resolved(&self, family: OptionFamily) -> bool {
        self.resolved.contains(family.flag())
    }

    /// Families left without an entry: nothing selected and no active default.
    pub fn unresolved(&self) -> impl Iterator<Item = OptionFamily> {
        self.resolved.missing()
    }

    /// Id of the entry chosen for `family`.
    #[must_use]
    pub fn option_id(&self, family: OptionFamily) -> Option<&str> {
        match family {
            OptionFamily::Perforation => self.perforation.map(OptionEntry::id),
            OptionFamily::Insole => self.insole.map(OptionEntry::id),
            OptionFamily::HardwareSet => self.hardware_set.map(OptionEntry::id),
            OptionFamily::Sole => self.sole.map(OptionEntry::id),
        }
    }
}

struct Resolution<'a> {
    model_id: &'a str,
    resolved: FamilySet,
    advisories: Vec<Advisory>,
}

impl<'a> Resolution<'a> {
    fn pick<T: OptionEntry>(
        &mut self,
        entries: &'a [T],
        requested: Option<&str>,
        default: Option<&'a T>,
    ) -> Option<&'a T> {
        let explicit = requested.and_then(|raw| self.explicit(entries, raw));
        let chosen = explicit.or_else(|| default.filter(|entry| entry.is_active()));
        if chosen.is_some() {
            self.resolved |= T::FAMILY.flag();
        }
        chosen
    }

    fn explicit<T: OptionEntry>(&mut self, entries: &'a [T], raw: &str) -> Option<&'a T> {
        let family = T::FAMILY;
        let known = |id: &str| find_entry(entries, id).is_some();
        let advisory = match ScopedId::verify_known(raw, self.model_id, known) {
            Ok(local) => match find_entry(entries, local).filter(|entry| entry.is_active()) {
                Some(entry) => return Some(entry),
                None => Advisory::UnresolvedVariantOption { family, id: raw.to_owned() },
            },
            Err(ScopedIdError::Foreign { .. }) => {
                Advisory::ForeignReference { family, id: raw.to_owned() }
            },
            Err(ScopedIdError::Malformed { .. }) => {
                Advisory::UnresolvedVariantOption { family, id: raw.to_owned() }
            },
        };
        warn!(model = %self.model_id, %advisory, "Variant option fell back to default");
        self.advisories.push(advisory);
        None
    }
}

/// Resolves `spec` against `model`. Never fails; see [`EffectiveConfiguration::advisories`].
#[must_use]
pub fn resolve<'a>(
    model: &'a Model,
    spec: &'a ModelVariantSpecification,
) -> EffectiveConfiguration<'a> {
    let bom = &model.super_bom;
    let mut resolution =
        Resolution { model_id: &model.id, resolved: FamilySet::empty(), advisories: Vec::new() };

    let perforation = resolution.pick(
        &bom.perforation_options,
        spec.option_id(OptionFamily::Perforation),
        default_entry(&bom.perforation_options),
    );
    let insole = resolution.pick(
        &bom.insole_options,
        spec.option_id(OptionFamily::Insole),
        default_entry(&bom.insole_options),
    );
    let hardware_set = resolution.pick(
        &bom.hardware_sets,
        spec.option_id(OptionFamily::HardwareSet),
        default_entry(&bom.hardware_sets),
    );
    let sole = resolution.pick(
        &model.sole_options,
        spec.option_id(OptionFamily::Sole),
        model.default_sole(),
    );

    let cutting_parts = if spec.customized_cutting_parts.is_empty() {
        model.cutting_parts.as_slice()
    } else {
        spec.customized_cutting_parts.as_slice()
    };
    let hardware_items = if spec.customized_hardware.is_empty() {
        hardware_set.map_or(&[][..], |set| set.items.as_slice())
    } else {
        spec.customized_hardware.as_slice()
    };

    EffectiveConfiguration {
        perforation,
        insole,
        hardware_set,
        sole,
        cutting_parts,
        hardware_items,
        material_cost: model.material_cost,
        resolved: resolution.resolved,
        advisories: resolution.advisories,
    }
}

/// Resolves a stored variant, refusing one that belongs to another model.
///
/// # Errors
/// [`CatalogError::ForeignVariant`] when `variant.model_id` is not `model.id`.
pub fn resolve_variant<'a>(
    model: &'a Model,
    variant: &'a ModelVariant,
) -> Result<EffectiveConfiguration<'a>, CatalogError> {
    if variant.model_id != model.id {
        return Err(CatalogError::ForeignVariant {
            expected: model.id.clone(),
            found: variant.model_id.clone(),
            context: Some(format!("Resolving variant '{}'", variant.id).into()),
        });
    }
    Ok(resolve(model, &variant.specification))
}
