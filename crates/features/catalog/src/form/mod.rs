//! Draft/entity mapping for form-shaped payloads.
//!
//! Forms see a flat shape: nested material and cutting-part references collapse to
//! their ids for selector widgets, and every field is optional. Mapping back rebuilds
//! the nested draft, applies defaults and synthesizes ids for new entries. No
//! validation happens here.

pub mod material;
pub mod model;
pub mod variant;

pub use material::{MaterialFormValues, material_from_form_values, material_to_form_values};
pub use model::{
    CuttingPartFormValues, HardwareItemFormValues, HardwareSetFormValues, InsoleFormValues,
    ModelFormValues, PerforationFormValues, SoleFormValues, SuperBomFormValues,
    model_from_form_values, model_to_form_values,
};
pub use variant::{
    VariantFormValues, variant_form_defaults, variant_from_form_values, variant_to_form_values,
};
