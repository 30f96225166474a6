#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the catalog workspace.
//!
//! * [`mfg_error`] turns a named-field enum into a `thiserror` error with context support.
//! * [`mfg_slice`] wraps feature state into a cheaply clonable slice handle.
//! * [`api_model`] applies the JSON contract policy (camelCase, strict fields) to DTOs.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mfg-derive = { path = "../infra/derive" }
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! the `tests/ui` cases compile them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Applies the JSON contract policy to a data transfer struct.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` when missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
///
/// # Example
///
/// ```rust,ignore
/// use mfg_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// #[derive(Clone, Default)]
/// pub struct SoleFormValues {
///     pub material_id: Option<String>,
///     pub size_min: Option<u8>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Defines a domain-specific error enum.
///
/// # Features
///
/// * **Automatic Derives**: injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: implements `From<T>` for variants carrying a `source`
///   field (or a field marked `#[source]`/`#[from]`), enabling `?`.
/// * **Internal Fallback**: implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a source field must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use mfg_derive::mfg_error;
/// use std::borrow::Cow;
///
/// #[mfg_error]
/// pub enum LookupError {
///     #[error("Lookup I/O failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal lookup error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LookupError> {
///     std::fs::read_to_string(path).context("Reading material catalog")
/// }
/// ```
#[proc_macro_attribute]
pub fn mfg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// 1. Renames the annotated struct to `<Name>Inner`.
/// 2. Generates `<Name>` holding an `Arc<<Name>Inner>` with `Deref` to the inner state.
/// 3. Implements `FeatureSlice` for registration through the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[mfg_derive::mfg_slice]
/// pub struct Catalog {
///     pub config: CatalogConfig,
/// }
///
/// let catalog = Catalog::new(CatalogInner { config });
/// ```
#[proc_macro_attribute]
pub fn mfg_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
