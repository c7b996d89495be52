#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use potter_catalog::routes::{LanguageIndex, TOTAL_COUNT_HEADER, catalog_router};
use potter_catalog::{ErrorBody, Record};
use potter_domain::config::{ApiConfig, CatalogConfig};
use potter_kernel::server::ApiState;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn app() -> Router {
    let slice = potter_catalog::init(&CatalogConfig::default()).expect("catalog slice");
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(slice)
        .build()
        .expect("state");

    let (router, _api) = catalog_router().split_for_parts();
    router.with_state(state)
}

async fn get(uri: &str) -> Response<Body> {
    app()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible")
}

async fn json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn language_index_lists_categories() {
    let response = get("/fr").await;
    assert_eq!(response.status(), StatusCode::OK);

    let index: LanguageIndex = json(response).await;
    assert_eq!(index.language, "fr");
    assert_eq!(index.categories, ["books", "characters", "houses", "spells"]);
    assert!(index.endpoints.contains(&"/fr/{type}/random".to_owned()));
}

#[tokio::test]
async fn unknown_language_or_category_is_404_json() {
    for uri in ["/de", "/de/books", "/en/wands", "/en/wands/random"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let body: ErrorBody = json(response).await;
        assert_eq!(body.status, 404);
    }
}

#[tokio::test]
async fn search_filters_by_name() {
    let response = get("/en/spells?search=LUMOS").await;
    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<serde_json::Value> = json(response).await;
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| {
        r["spell"].as_str().is_some_and(|name| name.to_lowercase().contains("lumos"))
    }));
}

#[tokio::test]
async fn no_match_is_an_empty_array() {
    let response = get("/en/houses?search=durmstrang").await;
    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<serde_json::Value> = json(response).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn index_returns_a_single_object() {
    let record: serde_json::Value = json(get("/en/houses?index=0").await).await;
    assert_eq!(record["house"], "Gryffindor");
    assert_eq!(record["index"], 0);

    assert_eq!(get("/en/houses?index=4").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_query_is_400_json() {
    for uri in ["/en/books?max=0", "/en/books?page=abc", "/en/books?index=-1"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: ErrorBody = json(response).await;
        assert_eq!(body.status, 400);
    }
}

#[tokio::test]
async fn absent_optionals_are_omitted() {
    let records: Vec<serde_json::Value> = json(get("/en/characters?search=dobby").await).await;
    let dobby = records.first().expect("Dobby is in the dataset");
    assert!(dobby.get("hogwartsHouse").is_none());
}

#[tokio::test]
async fn random_returns_one_record_of_the_category() {
    let response = get("/pt/books/random").await;
    assert_eq!(response.status(), StatusCode::OK);

    let record: Record = json(response).await;
    assert!(matches!(record, Record::Book(_)));
}

#[tokio::test]
async fn cards_render_html_with_count() {
    let response = get("/en/houses/cards?max=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"))
    );
    assert_eq!(
        response.headers().get(TOTAL_COUNT_HEADER).and_then(|v| v.to_str().ok()),
        Some("2")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert_eq!(html.matches(r#"class="result-card""#).count(), 2);
    assert!(html.contains("Gryffindor"));
}

#[tokio::test]
async fn cards_without_matches_are_empty_with_zero_count() {
    let response = get("/en/houses/cards?search=zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(TOTAL_COUNT_HEADER).and_then(|v| v.to_str().ok()),
        Some("0")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn cards_for_unknown_category_are_404_json() {
    let response = get("/en/wands/cards").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorBody = json(response).await;
    assert_eq!(body.status, 404);
    assert!(body.error.contains("wands"));
}
