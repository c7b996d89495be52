use axum::Router;
use axum::response::Html;
use axum::routing::get;
use potter::kernel::prelude::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

/// Served at `/` when the static directory has no `index.html`.
pub const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Potter API</title>
</head>
<body>
  <h1>Potter API</h1>
  <p>Books, characters, houses and spells as JSON.</p>
  <ul>
    <li><code>GET /{lang}/{type}</code> with optional <code>search</code>, <code>index</code>, <code>max</code>, <code>page</code></li>
    <li><code>GET /{lang}/{type}/random</code></li>
    <li><code>GET /{lang}/{type}/cards</code></li>
  </ul>
  <p>Languages: en, es, fr, it, pt, uk. Types: books, characters, houses, spells.</p>
  <p><a href="/api">API reference</a></p>
</body>
</html>
"#;

#[derive(OpenApi)]
#[openapi(info(
    title = "Potter API",
    description = "Reference data of the Harry Potter series: books, characters, houses and spells"
))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();
    let index = static_dir.join("index.html");

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(potter::server::router::system_router())
        .merge(potter::server::router::catalog_router())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    let landing = if index.is_file() {
        Router::new().route_service("/", ServeFile::new(index))
    } else {
        Router::new().route("/", get(|| async { Html(LANDING_PAGE) }))
    };

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(landing)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
