#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace:
//!
//! * [`macro@main`] boots an `async fn main` on a `potter-runtime` profile.
//! * [`macro@potter_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] / [`macro@api_handler`] keep DTOs and axum handlers consistent
//!   and register them with `utoipa` when the consumer enables its `server` feature.
//! * [`macro@potter_slice`] wraps a feature state into a shareable slice handle.
//!
//! Examples are `ignore`d here because proc-macro crates cannot use their own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Runs an `async fn main` on a pre-configured Tokio runtime.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
/// The function must return a `Result`.
///
/// ```rust,ignore
/// #[potter_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data model.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived yet,
/// `utoipa::ToSchema` behind the consumer's `server` feature, and the serde policy
/// `rename_all = "camelCase"` plus `deny_unknown_fields`. Both can be overridden:
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct Landing {
///     pub language: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Marks an axum handler and forwards its arguments to `utoipa::path`.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must be typed `Option<Cow<'static, str>>`.
/// * A variant wrapping another error (field named `source`, or marked `#[source]`/`#[from]`)
///   must also carry `context`.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every wrapped source type.
/// * `From<Source>` for each wrapped source.
/// * `From<&'static str>` / `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// ```rust,ignore
/// #[potter_error]
/// pub enum CatalogError {
///     #[error("Dataset error{}: {source}", format_context(.context))]
///     Dataset { source: serde_json::Error, context: Option<Cow<'static, str>> },
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn potter_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `FeatureSlice` for registration in `ApiState`.
///
/// ```rust,ignore
/// #[potter_derive::potter_slice]
/// pub struct Catalog {
///     pub dataset: Dataset,
/// }
///
/// let slice = Catalog::new(CatalogInner { dataset });
/// ```
#[proc_macro_attribute]
pub fn potter_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
