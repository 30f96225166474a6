use super::{ValidationReport, Violation, ViolationKind};
use crate::form::ModelFormValues;
use fxhash::FxHashSet;
use mfg_domain::config::CatalogConfig;
use mfg_domain::constants::MAX_CUTTING_QUANTITY;
use mfg_domain::{ModelDraft, OptionEntry, OptionFamily};

fn at(collection: &str, index: usize, field: &str) -> String {
    format!("{collection}[{index}].{field}")
}

fn missing(report: &mut ValidationReport, field: &str) {
    report.push(Violation::new(
        ViolationKind::MissingRequiredField,
        field,
        format!("'{field}' is required"),
    ));
}

fn blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub(super) fn required_form_fields(values: &ModelFormValues, report: &mut ValidationReport) {
    let present = [
        ("name", !blank(values.name.as_deref())),
        ("article", !blank(values.article.as_deref())),
        ("gender", values.gender.is_some()),
        ("modelType", values.model_type.is_some()),
        ("category", values.category.is_some()),
        ("sizeMin", values.size_min.is_some()),
        ("sizeMax", values.size_max.is_some()),
        ("retailPrice", values.retail_price.is_some()),
        ("wholesalePrice", values.wholesale_price.is_some()),
    ];
    for (field, _) in present.into_iter().filter(|(_, ok)| !ok) {
        missing(report, field);
    }
}

/// A mapped draft always carries enums, sizes and prices; only text can be blank.
pub(super) fn required_draft_fields(draft: &ModelDraft, report: &mut ValidationReport) {
    if blank(Some(&draft.name)) {
        missing(report, "name");
    }
    if blank(Some(&draft.article)) {
        missing(report, "article");
    }
}

pub(super) fn size_range(
    draft: &ModelDraft,
    config: &CatalogConfig,
    report: &mut ValidationReport,
) {
    let (min, max) = (config.sizing.global_min, config.sizing.global_max);
    let bounds = min..=max;

    for (field, size) in [("sizeMin", draft.size_min), ("sizeMax", draft.size_max)] {
        if !bounds.contains(&size) {
            report.push(Violation::new(
                ViolationKind::InvalidSizeRange,
                field,
                format!("Size {size} is outside {min}..={max}"),
            ));
        }
    }

    if draft.size_min > draft.size_max {
        report.push(Violation::new(
            ViolationKind::InvalidSizeRange,
            "sizeMin",
            format!("sizeMin {} exceeds sizeMax {}", draft.size_min, draft.size_max),
        ));
    }
}

fn single_default_in<T: OptionEntry>(entries: &[T], report: &mut ValidationReport) {
    let path = T::FAMILY.collection_path();
    for (index, _) in entries.iter().enumerate().filter(|(_, e)| e.is_default()).skip(1) {
        report.push(Violation::new(
            ViolationKind::MultipleDefaultOptions,
            at(path, index, "isDefault"),
            format!("Only one {} option may be the default", T::FAMILY),
        ));
    }
}

pub(super) fn single_default(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    single_default_in(&draft.super_bom.perforation_options, report);
    single_default_in(&draft.super_bom.insole_options, report);
    single_default_in(&draft.super_bom.hardware_sets, report);
    single_default_in(&draft.sole_options, report);
}

fn names_in<T: OptionEntry>(entries: &[T], report: &mut ValidationReport) {
    let path = T::FAMILY.collection_path();
    for (index, _) in entries.iter().enumerate().filter(|(_, e)| e.name().trim().is_empty()) {
        report.push(Violation::new(
            ViolationKind::MissingOptionName,
            at(path, index, "name"),
            format!("{} option needs a name", T::FAMILY),
        ));
    }
}

pub(super) fn option_names(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    names_in(&draft.super_bom.perforation_options, report);
    names_in(&draft.super_bom.insole_options, report);
    names_in(&draft.super_bom.hardware_sets, report);

    let sets = OptionFamily::HardwareSet.collection_path();
    for (set_index, set) in draft.super_bom.hardware_sets.iter().enumerate() {
        for (index, _) in set.items.iter().enumerate().filter(|(_, i)| i.name.trim().is_empty()) {
            report.push(Violation::new(
                ViolationKind::MissingOptionName,
                format!("{sets}[{set_index}].items[{index}].name"),
                "Hardware item needs a name",
            ));
        }
    }

    names_in(&draft.sole_options, report);
}

pub(super) fn hardware_items(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    let sets = OptionFamily::HardwareSet.collection_path();
    for (set_index, set) in draft.super_bom.hardware_sets.iter().enumerate() {
        let ambiguous = set
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                !item.requires_exact_selection && item.compatible_materials.is_empty()
            });
        for (index, item) in ambiguous {
            report.push(Violation::new(
                ViolationKind::AmbiguousHardwareItem,
                format!("{sets}[{set_index}].items[{index}].compatibleMaterials"),
                format!(
                    "Hardware item '{}' has no compatible material and no exact selection",
                    item.name
                ),
            ));
        }
    }
}

/// Only checks that reference ids are present; existence is the lookup's job.
pub(super) fn references(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    for (index, usage) in draft.cutting_parts.iter().enumerate() {
        if usage.part.id.trim().is_empty() {
            report.push(Violation::new(
                ViolationKind::DanglingReference,
                at("cuttingParts", index, "part"),
                "Cutting part is not selected",
            ));
        }
        if usage.material.id.trim().is_empty() {
            report.push(Violation::new(
                ViolationKind::DanglingReference,
                at("cuttingParts", index, "material"),
                "Cutting material is not selected",
            ));
        }
    }

    for (index, sole) in draft.sole_options.iter().enumerate() {
        if sole.material.id.trim().is_empty() {
            report.push(Violation::new(
                ViolationKind::DanglingReference,
                at("soleOptions", index, "material"),
                format!("Sole option '{}' has no material", sole.name),
            ));
        }
    }
}

pub(super) fn sole_ranges(
    draft: &ModelDraft,
    config: &CatalogConfig,
    report: &mut ValidationReport,
) {
    for (index, sole) in draft.sole_options.iter().enumerate() {
        if sole.size_min > sole.size_max {
            report.push(Violation::new(
                ViolationKind::InvalidSizeRange,
                at("soleOptions", index, "sizeMin"),
                format!(
                    "Sole option '{}': sizeMin {} exceeds sizeMax {}",
                    sole.name, sole.size_min, sole.size_max
                ),
            ));
        }
    }

    if !config.validation.coverage_warnings || draft.sole_options.is_empty() {
        return;
    }

    let gaps = coverage_gaps(draft);
    if !gaps.is_empty() {
        let listed: Vec<String> = gaps
            .iter()
            .map(|&(from, to)| if from == to { from.to_string() } else { format!("{from}-{to}") })
            .collect();
        report.push(Violation::new(
            ViolationKind::IncompleteSizeCoverage,
            "soleOptions",
            format!("No sole option covers size(s) {}", listed.join(", ")),
        ));
    }
}

/// Contiguous model sizes not covered by any well-formed sole option.
fn coverage_gaps(draft: &ModelDraft) -> Vec<(u8, u8)> {
    let mut gaps: Vec<(u8, u8)> = Vec::new();
    for size in draft.size_min..=draft.size_max {
        if draft.sole_options.iter().any(|sole| sole.covers(size)) {
            continue;
        }
        match gaps.last_mut() {
            Some((_, to)) if to.checked_add(1) == Some(size) => *to = size,
            _ => gaps.push((size, size)),
        }
    }
    gaps
}

fn amount(report: &mut ValidationReport, path: impl Into<String>, value: Option<f64>) {
    if let Some(value) = value.filter(|v| !v.is_finite() || *v < 0.0) {
        let path = path.into();
        let message = format!("'{path}' must be a non-negative number, got {value}");
        report.push(Violation::new(ViolationKind::InvalidAmount, path, message));
    }
}

pub(super) fn amounts(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    amount(report, "retailPrice", Some(draft.retail_price));
    amount(report, "wholesalePrice", Some(draft.wholesale_price));
    amount(report, "materialCost", draft.material_cost);
    amount(report, "laborCost", draft.labor_cost);
    amount(report, "overheadCost", draft.overhead_cost);

    for (index, usage) in draft.cutting_parts.iter().enumerate() {
        amount(report, at("cuttingParts", index, "consumptionPerPair"), usage.consumption_per_pair);
        amount(report, at("cuttingParts", index, "laborCost"), usage.labor_cost);
    }
}

pub(super) fn cutting_quantities(
    draft: &ModelDraft,
    _: &CatalogConfig,
    report: &mut ValidationReport,
) {
    for (index, usage) in draft.cutting_parts.iter().enumerate() {
        if usage.quantity > MAX_CUTTING_QUANTITY {
            report.push(Violation::new(
                ViolationKind::InvalidQuantity,
                at("cuttingParts", index, "quantity"),
                format!("Quantity {} is outside 0..={MAX_CUTTING_QUANTITY}", usage.quantity),
            ));
        }
    }
}

pub(super) fn sole_bounds(
    draft: &ModelDraft,
    config: &CatalogConfig,
    report: &mut ValidationReport,
) {
    let (min, max) = (config.sizing.global_min, config.sizing.global_max);
    let bounds = min..=max;

    for (index, sole) in draft.sole_options.iter().enumerate() {
        for (field, size) in [("sizeMin", sole.size_min), ("sizeMax", sole.size_max)] {
            if !bounds.contains(&size) {
                report.push(Violation::new(
                    ViolationKind::InvalidSizeRange,
                    at("soleOptions", index, field),
                    format!("Sole size {size} is outside {min}..={max}"),
                ));
            }
        }
    }
}

/// Reports every repeated non-empty id after its first occurrence.
fn unique_in<'a>(
    path: &str,
    ids: impl Iterator<Item = &'a str>,
    report: &mut ValidationReport,
) {
    let mut seen = FxHashSet::default();
    for (index, id) in ids.enumerate() {
        if !id.is_empty() && !seen.insert(id) {
            report.push(Violation::new(
                ViolationKind::DuplicateOptionId,
                at(path, index, "id"),
                format!("Id '{id}' is used more than once"),
            ));
        }
    }
}

fn unique_entries<T: OptionEntry>(entries: &[T], report: &mut ValidationReport) {
    unique_in(T::FAMILY.collection_path(), entries.iter().map(OptionEntry::id), report);
}

pub(super) fn unique_ids(draft: &ModelDraft, _: &CatalogConfig, report: &mut ValidationReport) {
    unique_entries(&draft.super_bom.perforation_options, report);
    unique_entries(&draft.super_bom.insole_options, report);
    unique_entries(&draft.super_bom.hardware_sets, report);

    let sets = OptionFamily::HardwareSet.collection_path();
    for (set_index, set) in draft.super_bom.hardware_sets.iter().enumerate() {
        let path = format!("{sets}[{set_index}].items");
        unique_in(&path, set.items.iter().map(|item| item.id.as_str()), report);
    }

    unique_in("cuttingParts", draft.cutting_parts.iter().map(|usage| usage.id.as_str()), report);
    unique_entries(&draft.sole_options, report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfg_domain::{
        HardwareItemOption, HardwareSet, MaterialReference, PerforationOption, SoleOption,
    };

    fn sole(min: u8, max: u8) -> SoleOption {
        SoleOption {
            id: format!("sole-{min}-{max}"),
            name: "EVA".to_owned(),
            material: MaterialReference { id: "mat-eva".to_owned(), ..Default::default() },
            size_min: min,
            size_max: max,
            ..SoleOption::default()
        }
    }

    fn draft() -> ModelDraft {
        ModelDraft {
            name: "SPORT 250".to_owned(),
            article: "SP-250".to_owned(),
            size_min: 40,
            size_max: 46,
            ..ModelDraft::default()
        }
    }

    fn run(check: super::super::Check, draft: &ModelDraft) -> ValidationReport {
        let mut report = ValidationReport::default();
        check(draft, &CatalogConfig::default(), &mut report);
        report
    }

    #[test]
    fn coverage_gaps_are_grouped() {
        let mut draft = draft();
        draft.sole_options = vec![sole(35, 41), sole(44, 44)];
        assert_eq!(coverage_gaps(&draft), vec![(42, 43), (45, 46)]);

        let report = run(sole_ranges, &draft);
        assert!(report.is_valid());
        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.kind, ViolationKind::IncompleteSizeCoverage);
        assert!(warning.message.contains("42-43, 45-46"));
    }

    #[test]
    fn models_without_soles_get_no_coverage_warning() {
        assert!(run(sole_ranges, &draft()).is_empty());
    }

    #[test]
    fn second_default_is_reported_at_its_index() {
        let mut draft = draft();
        let option = |id: &str| PerforationOption {
            id: id.to_owned(),
            name: id.to_owned(),
            is_default: true,
            is_active: true,
            ..PerforationOption::default()
        };
        draft.super_bom.perforation_options = vec![option("a"), option("b")];

        let report = run(single_default, &draft);
        let first = report.first().unwrap();
        assert_eq!(first.kind, ViolationKind::MultipleDefaultOptions);
        assert_eq!(first.path, "superBom.perforationOptions[1].isDefault");
    }

    #[test]
    fn exact_selection_items_may_omit_materials() {
        let mut draft = draft();
        draft.super_bom.hardware_sets = vec![HardwareSet {
            id: "hardware-0".to_owned(),
            name: "Базовый".to_owned(),
            is_active: true,
            items: vec![HardwareItemOption {
                id: "eyelets".to_owned(),
                name: "Блочки".to_owned(),
                requires_exact_selection: true,
                ..HardwareItemOption::default()
            }],
            ..HardwareSet::default()
        }];
        assert!(run(hardware_items, &draft).is_valid());
    }

    #[test]
    fn negative_and_nan_amounts_are_invalid() {
        let mut draft = draft();
        draft.retail_price = -1.0;
        draft.overhead_cost = Some(f64::NAN);

        let paths: Vec<_> = run(amounts, &draft).errors().map(|v| v.path.clone()).collect();
        assert_eq!(paths, vec!["retailPrice", "overheadCost"]);
    }

    #[test]
    fn duplicate_ids_are_reported_once_per_repeat() {
        let mut draft = draft();
        draft.sole_options = vec![sole(35, 46), sole(35, 46), sole(35, 46)];

        let report = run(unique_ids, &draft);
        let paths: Vec<_> = report.errors().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["soleOptions[1].id", "soleOptions[2].id"]);
    }
}
