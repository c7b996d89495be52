use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use potter_server::{LANDING_PAGE, Server};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn app(static_dir: &Path) -> Router {
    Server::builder().static_dir(static_dir).build().expect("server builds").router()
}

async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.expect("infallible")
}

async fn get(router: Router, uri: &str) -> Response<Body> {
    send(router, Request::get(uri).body(Body::empty()).expect("request")).await
}

async fn text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

fn public_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<h1>client</h1>").expect("index");
    fs::write(dir.path().join("style.css"), "body { margin: 0; }").expect("style");
    dir
}

#[tokio::test]
async fn root_serves_index_from_static_dir() {
    let dir = public_dir();
    let response = get(app(dir.path()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "<h1>client</h1>");
}

#[tokio::test]
async fn root_falls_back_to_built_in_page() {
    let dir = TempDir::new().expect("tempdir");
    let response = get(app(&dir.path().join("missing")), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, LANDING_PAGE);
}

#[tokio::test]
async fn assets_are_served_under_static() {
    let dir = public_dir();
    let response = get(app(dir.path()), "/static/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/css"))
    );
}

#[tokio::test]
async fn api_routes_are_mounted_next_to_assets() {
    let dir = public_dir();
    let router = app(dir.path());

    assert_eq!(get(router.clone(), "/health").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), "/en").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), "/en/houses").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), "/en/houses/random").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), "/xx/houses").await.status(), StatusCode::NOT_FOUND);

    let docs = get(router, "/api").await;
    assert_eq!(docs.status(), StatusCode::OK);
    assert!(text(docs).await.contains("Potter API"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let dir = public_dir();
    let request = Request::get("/en/spells")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .expect("request");

    let response = send(app(dir.path()), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[test]
fn missing_certificate_fails_build() {
    let dir = TempDir::new().expect("tempdir");
    let mut cfg = potter::domain::config::ApiConfig::default();
    cfg.server.ssl = Some(potter::domain::config::SslConfig {
        cert: dir.path().join("cert.pem"),
        key: dir.path().join("key.pem"),
    });

    let err = Server::builder().config(cfg).build().expect_err("no certificate");
    assert!(err.to_string().contains("SSL certificate not found"));
}
