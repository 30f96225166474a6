//! Stable literals shared across the catalog.

/// Smallest shoe size any model or sole option may declare.
pub const GLOBAL_SIZE_MIN: u8 = 20;
/// Largest shoe size any model or sole option may declare.
pub const GLOBAL_SIZE_MAX: u8 = 55;

/// Upper bound for the per-pair quantity of one cutting part.
pub const MAX_CUTTING_QUANTITY: u8 = 10;

/// Reference type tag for cutting parts.
pub const CUTTING_PART: &str = "cutting_part";

/// Default currency for material supply prices.
pub const DEFAULT_CURRENCY: &str = "RUB";

// Prefixes for synthesized entry ids: `<prefix>-<index>-<token>`.
pub const PERFORATION_PREFIX: &str = "perf";
pub const INSOLE_PREFIX: &str = "insole";
pub const HARDWARE_SET_PREFIX: &str = "hardware";
pub const HARDWARE_ITEM_PREFIX: &str = "hardware-item";
pub const CUTTING_PREFIX: &str = "cutting";
pub const SOLE_PREFIX: &str = "sole";
pub const VARIANT_PREFIX: &str = "variant";
