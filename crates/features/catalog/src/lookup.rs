//! Reference hydration through the lookup collaborator.

use crate::validation::{ValidationReport, Violation, ViolationKind};
use fxhash::FxHashMap;
use mfg_domain::{Material, MaterialReference, ModelDraft, OptionFamily, ReferenceItem};
use tracing::debug;

/// Existence and display attributes for referenced entities.
pub trait ReferenceLookup {
    fn cutting_part(&self, id: &str) -> Option<ReferenceItem>;
    fn material(&self, id: &str) -> Option<MaterialReference>;
}

/// In-memory lookup over known cutting parts and materials.
#[derive(Debug, Clone, Default)]
pub struct ReferenceBook {
    cutting_parts: FxHashMap<String, ReferenceItem>,
    materials: FxHashMap<String, MaterialReference>,
}

impl ReferenceBook {
    pub fn insert_cutting_part(&mut self, item: ReferenceItem) {
        self.cutting_parts.insert(item.id.clone(), item);
    }

    pub fn insert_material(&mut self, material: MaterialReference) {
        self.materials.insert(material.id.clone(), material);
    }
}

impl FromIterator<Material> for ReferenceBook {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut book = Self::default();
        for material in iter {
            book.insert_material(material.reference());
        }
        book
    }
}

impl ReferenceLookup for ReferenceBook {
    fn cutting_part(&self, id: &str) -> Option<ReferenceItem> {
        self.cutting_parts.get(id).cloned()
    }

    fn material(&self, id: &str) -> Option<MaterialReference> {
        self.materials.get(id).cloned()
    }
}

fn dangling(report: &mut ValidationReport, path: String, what: &str, id: &str) {
    report.push(Violation::new(
        ViolationKind::DanglingReference,
        path,
        format!("Unknown {what} '{id}'"),
    ));
}

fn hydrate_material(
    slot: &mut MaterialReference,
    lookup: &impl ReferenceLookup,
    path: String,
    report: &mut ValidationReport,
) {
    if slot.id.trim().is_empty() {
        return;
    }
    match lookup.material(&slot.id) {
        Some(found) => *slot = found,
        None => dangling(report, path, "material", &slot.id),
    }
}

/// Replaces id-only placeholders with the lookup's display attributes.
///
/// Ids the lookup cannot resolve stay as placeholders and are reported as
/// `DanglingReference`. Blank ids are left to the validator.
pub fn hydrate_references(
    draft: &mut ModelDraft,
    lookup: &impl ReferenceLookup,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, usage) in draft.cutting_parts.iter_mut().enumerate() {
        if !usage.part.id.trim().is_empty() {
            match lookup.cutting_part(&usage.part.id) {
                Some(found) => usage.part = found,
                None => dangling(
                    &mut report,
                    format!("cuttingParts[{index}].part"),
                    "cutting part",
                    &usage.part.id,
                ),
            }
        }
        hydrate_material(
            &mut usage.material,
            lookup,
            format!("cuttingParts[{index}].material"),
            &mut report,
        );
    }

    let sets = OptionFamily::HardwareSet.collection_path();
    for (set_index, set) in draft.super_bom.hardware_sets.iter_mut().enumerate() {
        for (item_index, item) in set.items.iter_mut().enumerate() {
            for (index, material) in item.compatible_materials.iter_mut().enumerate() {
                hydrate_material(
                    material,
                    lookup,
                    format!("{sets}[{set_index}].items[{item_index}].compatibleMaterials[{index}]"),
                    &mut report,
                );
            }
        }
    }

    for (index, sole) in draft.sole_options.iter_mut().enumerate() {
        let path = format!("soleOptions[{index}].material");
        hydrate_material(&mut sole.material, lookup, path, &mut report);
    }

    debug!(article = %draft.article, dangling = report.errors().count(), "References hydrated");
    report
}
