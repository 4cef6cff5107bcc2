#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the `FormHub` workspace.
//!
//! ## Usage
//! Depend on the crate through the workspace table:
//! ```toml
//! [dependencies]
//! fhub-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d to avoid compiling in this crate; the consuming
//! crates and `tests/ui` exercise them.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Kind**: A `kind()` method returning the variant name, handy for structured logs.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use fhub_derive::fhub_error;
/// use std::borrow::Cow;
///
/// #[fhub_error]
/// pub enum PatternError {
///     #[error("Invalid pattern{}: {source}", format_context(.context))]
///     InvalidPattern { source: regex::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal pattern error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn compile(raw: &str) -> Result<regex::Regex, PatternError> {
///     regex::Regex::new(raw).context("Compiling the textual pattern")
/// }
/// ```
#[proc_macro_attribute]
pub fn fhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
