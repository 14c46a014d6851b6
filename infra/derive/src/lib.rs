#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! sigi-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Doc examples are `ignore`d because a proc-macro crate cannot use its own macros.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A variant wrapping a source error must carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sigi_derive::sigi_error]
/// pub enum FormError {
///     #[error("Missing element{}: {id}", format_context(.context))]
///     MissingElement { id: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal form error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn sigi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
