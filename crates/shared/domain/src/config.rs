use crate::constants::{DEFAULT_CURRENCY, GLOBAL_SIZE_MAX, GLOBAL_SIZE_MIN};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Catalog configuration shared by every slice.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfigInner {
    pub sizing: SizingConfig,
    pub ids: IdConfig,
    pub validation: ValidationConfig,
    pub variants: VariantConfig,
    pub defaults: DefaultsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(flatten, default)]
    inner: Arc<CatalogConfigInner>,
}

impl Deref for CatalogConfig {
    type Target = CatalogConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CatalogConfig {
    fn deref_mut(&mut self) -> &mut CatalogConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Size bounds and form defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    pub global_min: u8,
    pub global_max: u8,
    pub default_min: u8,
    pub default_max: u8,
    pub sole_default_min: u8,
    pub sole_default_max: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Nanoid,
    /// Deterministic per-session counter; handy for tests and fixtures.
    Sequential,
}

/// Entry id synthesis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub strategy: IdStrategy,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Stop at the first blocking violation instead of collecting all of them.
    pub fail_fast: bool,
    pub coverage_warnings: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Refuse to save a variant that references a missing or inactive option.
    pub reject_unresolved_on_save: bool,
}

/// Labels and values used when a fresh form is defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub perforation_label: String,
    pub insole_label: String,
    pub hardware_label: String,
    pub currency: String,
}

// --- Default ---

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            global_min: GLOBAL_SIZE_MIN,
            global_max: GLOBAL_SIZE_MAX,
            default_min: 39,
            default_max: 45,
            sole_default_min: 35,
            sole_default_max: 46,
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self { strategy: IdStrategy::Nanoid, length: 12 }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { fail_fast: false, coverage_warnings: true }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self { reject_unresolved_on_save: true }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            perforation_label: "Без перфорации".to_owned(),
            insole_label: "Стелька стандарт".to_owned(),
            hardware_label: "Базовый комплект".to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}
