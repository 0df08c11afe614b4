#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the theme kernel crates.
//!
//! ## Usage
//! Consuming crates depend on this crate directly and on `thiserror`, which the
//! generated code refers to by absolute path:
//! ```toml
//! [dependencies]
//! tkernel-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into an error type wired into the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>`.
/// * For variants whose only fields are a source and `context`: `From<SourceError>` and
///   `<ErrorName>Ext` for `Result<T, SourceError>`.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * `ErrorName::kind()` returning the variant name, for structured log fields.
/// * A module-private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 4. Variants with a source (`source` field, `#[source]` or `#[from]`) must carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tkernel_derive::tkernel_error]
/// pub enum LoadError {
///     #[error("Read failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading theme config")
/// }
/// ```
#[proc_macro_attribute]
pub fn tkernel_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
