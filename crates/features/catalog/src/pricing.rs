//! Material cost estimation for resolved configurations.

use crate::resolver::EffectiveConfiguration;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Current unit prices of materials.
pub trait PriceTable {
    fn unit_price(&self, material_id: &str) -> Option<f64>;
}

// Covers both `HashMap<String, f64>` and `FxHashMap<String, f64>`.
impl<S: BuildHasher> PriceTable for HashMap<String, f64, S> {
    fn unit_price(&self, material_id: &str) -> Option<f64> {
        self.get(material_id).copied()
    }
}

impl<T: PriceTable + ?Sized> PriceTable for &T {
    fn unit_price(&self, material_id: &str) -> Option<f64> {
        (**self).unit_price(material_id)
    }
}

/// Estimates the material cost of a configuration.
///
/// The model's `materialCost` baseline (zero when absent), plus the price of the first
/// compatible material of every effective hardware item, plus the chosen sole's material.
/// Items that require an exact selection but list no compatible material are priced when
/// the material is picked, so they add nothing here.
/// Returns `None` when any other item has no compatible material or a referenced material
/// has no price: the estimate is then not computable.
pub fn estimate_cost(
    resolved: &EffectiveConfiguration<'_>,
    prices: &impl PriceTable,
) -> Option<f64> {
    let hardware = resolved
        .hardware_items
        .iter()
        .filter(|item| !(item.requires_exact_selection && item.compatible_materials.is_empty()))
        .try_fold(0.0, |total, item| {
            let material = item.compatible_materials.first()?;
            Some(total + prices.unit_price(&material.id)?)
        })?;

    let sole = match resolved.sole {
        Some(sole) => prices.unit_price(&sole.material.id)?,
        None => 0.0,
    };

    Some(resolved.material_cost.unwrap_or(0.0) + hardware + sole)
}
