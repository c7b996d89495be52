//! HTTP surface of the catalog: `/{lang}`, `/{lang}/{type}`, `/{lang}/{type}/random` and
//! `/{lang}/{type}/cards`.

use crate::error::{CatalogError, ErrorBody};
use crate::query::{ListQuery, Listing, resolve_category, resolve_language};
use crate::{Catalog, Record, render};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use potter_derive::{api_handler, api_model};
use potter_domain::catalog::{Category, Language};
use potter_domain::constants::CATALOG_TAG;
use potter_kernel::server::ApiState;
use strum::IntoEnumIterator;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Response header carrying the number of rendered cards.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[api_model]
/// What a language prefix exposes
pub struct LanguageIndex {
    pub language: String,
    pub categories: Vec<String>,
    /// Route templates under this language
    pub endpoints: Vec<String>,
}

/// Catalog routes, mounted at the root of the application router.
pub fn catalog_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(language_handler))
        .routes(routes!(list_handler))
        .routes(routes!(random_handler))
        .routes(routes!(cards_handler))
}

fn catalog(state: &ApiState) -> Result<&Catalog, CatalogError> {
    state.try_get_slice::<Catalog>().map_err(|err| CatalogError::Internal {
        message: err.to_string().into(),
        context: Some("Resolving catalog slice".into()),
    })
}

fn resolve_path(lang: &str, category: &str) -> Result<(Language, Category), CatalogError> {
    Ok((resolve_language(lang)?, resolve_category(category)?))
}

fn list_query(query: Result<Query<ListQuery>, QueryRejection>) -> Result<ListQuery, CatalogError> {
    query.map(|Query(query)| query).map_err(|rejection| CatalogError::InvalidQuery {
        message: rejection.body_text().into(),
        context: None,
    })
}

#[api_handler(
    get,
    path = "/{lang}",
    params(("lang" = String, Path, description = "Language code (en, es, fr, it, pt, uk)")),
    responses(
        (status = OK, description = "Categories served under the language", body = LanguageIndex),
        (status = NOT_FOUND, description = "Unknown language", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
pub async fn language_handler(
    Path(lang): Path<String>,
) -> Result<Json<LanguageIndex>, CatalogError> {
    let language = resolve_language(&lang)?;

    Ok(Json(LanguageIndex {
        language: language.to_string(),
        categories: Category::iter().map(|category| category.to_string()).collect(),
        endpoints: ["{type}", "{type}/random", "{type}/cards"]
            .iter()
            .map(|suffix| format!("/{language}/{suffix}"))
            .collect(),
    }))
}

#[api_handler(
    get,
    path = "/{lang}/{category}",
    params(
        ("lang" = String, Path, description = "Language code"),
        ("category" = String, Path, description = "books, characters, houses or spells"),
        ListQuery,
    ),
    responses(
        (status = OK, description = "Matching records, or one record when `index` is set", body = Listing),
        (status = BAD_REQUEST, description = "Malformed query", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown language or category, or index out of range", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
pub async fn list_handler(
    State(state): State<ApiState>,
    Path((lang, category)): Path<(String, String)>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Listing>, CatalogError> {
    let (_, category) = resolve_path(&lang, &category)?;
    let query = list_query(query)?;

    let listing = catalog(&state)?.list(category, &query)?;
    tracing::debug!(%category, search = ?query.search, returned = listing.len(), "Catalog listed");

    Ok(Json(listing))
}

#[api_handler(
    get,
    path = "/{lang}/{category}/random",
    params(
        ("lang" = String, Path, description = "Language code"),
        ("category" = String, Path, description = "books, characters, houses or spells"),
    ),
    responses(
        (status = OK, description = "One record drawn at random", body = Record),
        (status = NOT_FOUND, description = "Unknown language or category", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
pub async fn random_handler(
    State(state): State<ApiState>,
    Path((lang, category)): Path<(String, String)>,
) -> Result<Json<Record>, CatalogError> {
    let (_, category) = resolve_path(&lang, &category)?;

    let record = catalog(&state)?.random(category, &mut rand::rng())?;
    tracing::debug!(%category, index = record.index(), "Random record picked");

    Ok(Json(record))
}

#[api_handler(
    get,
    path = "/{lang}/{category}/cards",
    params(
        ("lang" = String, Path, description = "Language code"),
        ("category" = String, Path, description = "books, characters, houses or spells"),
        ListQuery,
    ),
    responses(
        (status = OK, description = "Rendered result cards", content_type = "text/html", body = String,
            headers(("x-total-count" = usize, description = "Number of rendered cards"))),
        (status = BAD_REQUEST, description = "Malformed query", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown language or category, or index out of range", body = ErrorBody),
    ),
    tag = CATALOG_TAG,
)]
pub async fn cards_handler(
    State(state): State<ApiState>,
    Path((lang, category)): Path<(String, String)>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let (_, category) = resolve_path(&lang, &category)?;
    let query = list_query(query)?;

    let listing = catalog(&state)?.list(category, &query)?;
    let items = serde_json::to_value(&listing).map_err(|err| CatalogError::Internal {
        message: err.to_string().into(),
        context: Some("Serializing records for rendering".into()),
    })?;
    let html = render::render_cards(category.as_ref(), &items);
    tracing::debug!(%category, cards = listing.len(), "Cards rendered");

    Ok(([(TOTAL_COUNT_HEADER, listing.len().to_string())], Html(html)))
}
