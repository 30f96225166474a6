//! # Domain Models
//!
//! Pure catalog types shared by every crate in the workspace: product models with their
//! SUPER-BOM option catalog, variants, materials and reference items.
//! Keep it lean: no I/O or business rules, just data, serde contracts and simple helpers.
//! Validation and resolution live in the catalog feature slice.

pub mod classification;
pub mod config;
pub mod constants;
pub mod families;
pub mod material;
pub mod model;
pub mod reference;
pub mod registry;
pub mod variant;

pub use classification::{
    Gender, LacingType, MaterialGroup, ModelCategory, ModelType, Season, UnitOfMeasure,
};
pub use config::CatalogConfig;
pub use families::{FamilySet, OptionFamily};
pub use material::{Material, MaterialDraft, MaterialReference};
pub use model::{
    Attachment, CuttingPartUsage, HardwareItemOption, HardwareSet, InsoleOption, KpiBlock,
    KpiTrend, KpiValue, Model, ModelDraft, OptionEntry, PerforationOption, SoleOption, SuperBom,
};
pub use reference::ReferenceItem;
pub use variant::{ModelVariant, ModelVariantDraft, ModelVariantSpecification, VariantStatus};
