//! # SUPER-BOM Validation
//!
//! Structural checks a model draft must pass before it is handed to the persistence
//! layer. Checks run in a fixed order:
//!
//! 1. Required fields (`MissingRequiredField`).
//! 2. Model size range (`InvalidSizeRange`).
//! 3. At most one default per option collection (`MultipleDefaultOptions`).
//! 4. Option names (`MissingOptionName`).
//! 5. Hardware items usable without manual selection (`AmbiguousHardwareItem`).
//! 6. Non-empty references (`DanglingReference`).
//! 7. Sole ranges and size coverage (`InvalidSizeRange`, `IncompleteSizeCoverage`).
//!
//! followed by amounts, cutting quantities, sole bounds and id uniqueness.
//!
//! The validator never fails; it returns a [`ValidationReport`] and leaves the
//! decision to the caller.

mod checks;
mod report;

pub use report::{Severity, ValidationReport, Violation, ViolationKind};

use crate::form::ModelFormValues;
use mfg_domain::ModelDraft;
use mfg_domain::config::CatalogConfig;
use tracing::debug;

type Check = fn(&ModelDraft, &CatalogConfig, &mut ValidationReport);

/// Checks 2 to 7 and the additional structural checks, in order.
const STRUCTURAL_CHECKS: &[Check] = &[
    checks::size_range,
    checks::single_default,
    checks::option_names,
    checks::hardware_items,
    checks::references,
    checks::sole_ranges,
    checks::amounts,
    checks::cutting_quantities,
    checks::sole_bounds,
    checks::unique_ids,
];

/// Empty report configured for `config`'s fail-fast mode.
#[must_use]
pub fn report_for(config: &CatalogConfig) -> ValidationReport {
    if config.validation.fail_fast {
        ValidationReport::fail_fast()
    } else {
        ValidationReport::default()
    }
}

/// Check 1 on raw form values, before defaults hide missing fields.
pub fn check_required_fields(values: &ModelFormValues, report: &mut ValidationReport) {
    checks::required_form_fields(values, report);
}

/// Validates an already mapped draft.
#[must_use]
pub fn validate_draft(draft: &ModelDraft, config: &CatalogConfig) -> ValidationReport {
    let mut report = report_for(config);
    checks::required_draft_fields(draft, &mut report);
    validate_structure(draft, config, &mut report);
    report
}

/// Runs checks 2 onwards into `report`.
pub fn validate_structure(
    draft: &ModelDraft,
    config: &CatalogConfig,
    report: &mut ValidationReport,
) {
    for check in STRUCTURAL_CHECKS {
        if report.is_halted() {
            break;
        }
        check(draft, config, report);
    }

    debug!(
        article = %draft.article,
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "Model draft validated"
    );
}
