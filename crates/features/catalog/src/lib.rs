//! # Model Configuration
//!
//! The catalog slice owns the SUPER-BOM composition model of a product:
//!
//! * **Mapping ([`form`])**: flat form values to nested drafts and back.
//! * **Validation ([`validation`])**: structural checks producing a [`ValidationReport`].
//! * **Resolution ([`resolver`], [`pricing`])**: the effective configuration of a variant
//!   and its material cost estimate.
//! * **Book-keeping ([`variants`])**: variant creation and the single-default rule.
//!
//! Everything here is synchronous and free of I/O; persistence, reference lookup and
//! prices are supplied by the caller.

mod error;
pub mod form;
pub mod ids;
pub mod lookup;
pub mod pricing;
pub mod resolver;
pub mod validation;
pub mod variants;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::ids::{IdGenerator, NanoIdGenerator, SequentialIdGenerator};
pub use crate::lookup::{ReferenceBook, ReferenceLookup, hydrate_references};
pub use crate::pricing::{PriceTable, estimate_cost};
pub use crate::resolver::{Advisory, EffectiveConfiguration, resolve, resolve_variant};
pub use crate::validation::{Severity, ValidationReport, Violation, ViolationKind};

use chrono::{DateTime, Utc};
use crate::form::{ModelFormValues, VariantFormValues};
use mfg_domain::config::CatalogConfig;
use mfg_domain::{Model, ModelDraft, ModelVariant, ModelVariantDraft};
use mfg_kernel::domain::registry::InitializedSlice;
use tracing::{info, instrument, warn};

/// Catalog feature state.
#[mfg_derive::mfg_slice]
pub struct Catalog {
    pub config: CatalogConfig,
    pub ids: Box<dyn IdGenerator>,
}

impl Catalog {
    #[must_use]
    pub fn from_config(config: CatalogConfig) -> Self {
        let ids = ids::from_config(&config.ids);
        Self::new(CatalogInner { config, ids })
    }

    /// Catalog with an explicit id generator.
    #[must_use]
    pub fn with_ids(config: CatalogConfig, ids: impl IdGenerator + 'static) -> Self {
        Self::new(CatalogInner { config, ids: Box::new(ids) })
    }

    /// Form values for `draft`, or a defaulted fresh form.
    #[must_use]
    pub fn to_form_values(&self, draft: Option<&ModelDraft>) -> ModelFormValues {
        form::model_to_form_values(draft, &self.config, self.ids.as_ref())
    }

    #[must_use]
    pub fn from_form_values(&self, values: ModelFormValues) -> ModelDraft {
        form::model_from_form_values(values, &self.config, self.ids.as_ref())
    }

    #[must_use]
    pub fn validate(&self, draft: &ModelDraft) -> ValidationReport {
        validation::validate_draft(draft, &self.config)
    }

    /// Checks raw form values, maps them and validates the resulting draft.
    ///
    /// Required fields are checked on the raw values, so a missing gender is reported
    /// before the mapper defaults it. Warnings travel with the accepted draft.
    ///
    /// # Errors
    /// [`CatalogError::Rejected`] carrying the full report when any blocking violation
    /// was found.
    #[instrument(skip_all, fields(article = values.article.as_deref().unwrap_or_default()))]
    pub fn submit_model(
        &self,
        values: ModelFormValues,
    ) -> Result<(ModelDraft, ValidationReport), CatalogError> {
        let mut report = validation::report_for(&self.config);
        validation::check_required_fields(&values, &mut report);

        let draft = self.from_form_values(values);
        validation::validate_structure(&draft, &self.config, &mut report);

        for warning in report.warnings() {
            warn!(path = %warning.path, "{}", warning.message);
        }

        if !report.is_valid() {
            info!(violations = report.errors().count(), "Model draft rejected");
            return Err(CatalogError::Rejected { report, context: None });
        }

        info!("Model draft accepted");
        Ok((draft, report))
    }

    #[must_use]
    pub fn variant_form_defaults(&self, model: &Model) -> VariantFormValues {
        form::variant_form_defaults(model)
    }

    /// Adds a variant built from `draft` to `model`.
    ///
    /// # Errors
    /// See [`variants::create_variant`].
    pub fn create_variant<'m>(
        &self,
        model: &'m mut Model,
        draft: ModelVariantDraft,
        now: DateTime<Utc>,
    ) -> Result<&'m ModelVariant, CatalogError> {
        variants::create_variant(model, draft, now, self.ids.as_ref(), &self.config)
    }

    /// # Errors
    /// See [`variants::upsert_variant`].
    pub fn upsert_variant<'m>(
        &self,
        model: &'m mut Model,
        variant: ModelVariant,
    ) -> Result<&'m ModelVariant, CatalogError> {
        variants::upsert_variant(model, variant, &self.config)
    }
}

/// Initialize the catalog feature.
///
/// # Errors
/// Returns an error if the configured size bounds are inverted.
pub fn init(config: &CatalogConfig) -> Result<InitializedSlice, CatalogError> {
    let sizing = &config.sizing;
    if sizing.global_min > sizing.global_max {
        let (min, max) = (sizing.global_min, sizing.global_max);
        return Err(CatalogError::Internal {
            message: format!("global_min {min} exceeds global_max {max}").into(),
            context: Some("sizing".into()),
        });
    }

    tracing::info!(ids = ?config.ids.strategy, "Catalog slice initialized");

    let slice = Catalog::from_config(config.clone());
    Ok(InitializedSlice::new(slice))
}
