//! # Model Configuration Inspector
//!
//! Offline front end over the catalog slice: maps and validates model forms, resolves
//! variant configurations and recomputes material costs from JSON files.
//!
//! ## Example
//! ```no_run
//! use mfg_inspector::{Inspector, InspectorSettings};
//!
//! fn main() -> anyhow::Result<()> {
//!     let inspector = Inspector::new(&InspectorSettings::default())?;
//!     let form = inspector.form(None);
//!     assert!(!form.super_bom.perforation_options.is_empty());
//!     Ok(())
//! }
//! ```

pub mod args;

use anyhow::{Context, Result, anyhow};
use fxhash::FxHashMap;
use mfg::domain::config::CatalogConfig;
use mfg::domain::{Material, Model, ModelDraft, ReferenceItem};
use mfg::features::catalog::form::ModelFormValues;
use mfg::features::catalog::variants::refresh_variant_costs;
use mfg::features::catalog::{
    Catalog, CatalogError, ReferenceBook, ValidationReport, hydrate_references, resolve_variant,
};
use mfg_logger::LoggingSettings;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Settings file layout of the inspector.
///
/// ```toml
/// [catalog.validation]
/// fail_fast = true
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    pub catalog: CatalogConfig,
    pub logging: LoggingSettings,
}

/// Reference book file: known cutting parts and materials.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct References {
    pub cutting_parts: Vec<ReferenceItem>,
    pub materials: Vec<Material>,
}

impl From<References> for ReferenceBook {
    fn from(references: References) -> Self {
        let mut book: Self = references.materials.into_iter().collect();
        for part in references.cutting_parts {
            book.insert_cutting_part(part);
        }
        book
    }
}

/// Result of the `validate` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<ModelDraft>,
    pub report: ValidationReport,
}

/// One row of the `estimate` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCost {
    pub id: String,
    pub name: String,
    pub total_material_cost: Option<f64>,
}

/// Reads and deserializes a JSON file.
///
/// # Errors
/// Fails when the file cannot be read or does not match `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Malformed JSON in {}", path.display()))
}

/// Catalog operations behind the CLI commands.
#[derive(Debug, Clone)]
pub struct Inspector {
    catalog: Catalog,
}

impl Inspector {
    /// Initializes the enabled features and picks up the catalog slice.
    ///
    /// # Errors
    /// Returns an error if feature initialization fails.
    pub fn new(settings: &InspectorSettings) -> Result<Self> {
        let registry = mfg::init(&settings.catalog)
            .map_err(|e| anyhow!("Feature initialization failed: {e}"))?;
        let catalog = registry
            .get::<Catalog>()
            .cloned()
            .context("Catalog feature is not enabled")?;

        debug!(features = registry.len(), "Inspector ready");
        Ok(Self { catalog })
    }

    #[must_use]
    pub fn form(&self, draft: Option<&ModelDraft>) -> ModelFormValues {
        self.catalog.to_form_values(draft)
    }

    /// Maps and validates form values. With a reference book, accepted drafts are
    /// hydrated and unknown references join the report.
    ///
    /// # Errors
    /// Only unexpected catalog failures; a rejected draft is a regular outcome.
    pub fn validate(
        &self,
        values: ModelFormValues,
        references: Option<&ReferenceBook>,
    ) -> Result<ValidationOutcome> {
        match self.catalog.submit_model(values) {
            Ok((mut draft, mut report)) => {
                if let Some(book) = references {
                    report.merge(hydrate_references(&mut draft, book));
                }
                let accepted = report.is_valid();
                Ok(ValidationOutcome { accepted, draft: accepted.then_some(draft), report })
            },
            Err(CatalogError::Rejected { report, .. }) => {
                Ok(ValidationOutcome { accepted: false, draft: None, report })
            },
            Err(other) => Err(other.into()),
        }
    }

    /// Effective configuration of `variant_id`, or of the default variant.
    ///
    /// # Errors
    /// Fails when the model has no such variant (or no default).
    pub fn resolve(&self, model: &Model, variant_id: Option<&str>) -> Result<serde_json::Value> {
        let variant = match variant_id {
            Some(id) => model.variant(id).with_context(|| format!("Unknown variant '{id}'"))?,
            None => model.default_variant().context("Model has no default variant")?,
        };

        let resolved = resolve_variant(model, variant)?;
        info!(
            variant = %variant.id,
            advisories = resolved.advisories.len(),
            unresolved = ?resolved.unresolved().collect::<Vec<_>>(),
            "Variant resolved"
        );
        Ok(serde_json::to_value(&resolved)?)
    }

    /// Recomputes every variant cost against `prices`.
    #[must_use]
    pub fn estimate(&self, mut model: Model, prices: &FxHashMap<String, f64>) -> Vec<VariantCost> {
        refresh_variant_costs(&mut model, prices);
        model
            .variants
            .into_iter()
            .map(|variant| VariantCost {
                id: variant.id,
                name: variant.name,
                total_material_cost: variant.total_material_cost,
            })
            .collect()
    }
}
