use super::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde options already written by hand on the struct.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match model_attrs(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

/// Forwards the arguments to `utoipa::path` behind the consumer's `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn model_attrs(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let existing = existing_serde(&input.attrs)?;
    let present = derived_traits(&input.attrs);

    let mut derives = Vec::new();
    for (name, tokens) in [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ] {
        if !present.contains(name) {
            derives.push(tokens);
        }
    }
    let derive = if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } };

    let schema = if present.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename = match &existing.rename_all {
        None => quote! { #[serde(rename_all = #wanted)] },
        Some(lit) if lit.value() == wanted.value() => quote! {},
        Some(lit) => {
            return Err(syn::Error::new_spanned(
                lit,
                "serde rename_all conflicts with api_model(rename_all = ...)",
            ));
        }
    };

    let deny = match (args.deny_unknown_fields.unwrap_or(true), existing.deny_unknown_fields) {
        (true, false) => quote! { #[serde(deny_unknown_fields)] },
        (true, true) => quote! {},
        (false, false) => quote! {},
        (false, true) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is set via serde; remove it before disabling it here",
            ));
        }
    };

    Ok(quote! {
        #derive
        #schema
        #rename
        #deny
    })
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(lit) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string"));
            };
            reject_duplicate(parsed.rename_all.is_some(), &nv)?;
            parsed.rename_all = Some(lit.clone());
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(lit) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            reject_duplicate(parsed.deny_unknown_fields.is_some(), &nv)?;
            parsed.deny_unknown_fields = Some(lit.value);
        } else {
            return Err(syn::Error::new_spanned(
                &nv.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue) -> syn::Result<&Lit> {
    match &nv.value {
        Expr::Lit(expr) => Ok(&expr.lit),
        other => Err(syn::Error::new_spanned(other, "expected a literal")),
    }
}

fn reject_duplicate(seen: bool, nv: &MetaNameValue) -> syn::Result<()> {
    if seen { Err(syn::Error::new_spanned(nv, "duplicate argument")) } else { Ok(()) }
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Other serde options are left alone.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}
