//! Facade crate for the manufacturing catalog features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and implements no business logic.
//!
//! ## Usage
//! - Add `mfg` with the desired feature flags (`catalog` is on by default).
//! - Call [`init`] to build the slice registry; extend it as new slices appear.

pub use mfg_domain as domain;
use mfg_domain::config::CatalogConfig;
use mfg_domain::registry::SliceRegistry;
pub use mfg_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "catalog")]
    pub use mfg_catalog as catalog;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "catalog")]
        "catalog",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &CatalogConfig) -> Result<SliceRegistry, Box<dyn std::error::Error>> {
    let mut registry = SliceRegistry::default();

    #[cfg(feature = "catalog")]
    registry.register(features::catalog::init(config)?);

    #[cfg(not(feature = "catalog"))]
    let _ = config;

    Ok(registry)
}
