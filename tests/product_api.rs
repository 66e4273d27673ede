mod common;

use std::sync::Arc;

use axum::{http::{Method, StatusCode}, Router};
use serde_json::json;
use storefront::{product_router, repositories::StaticProductCatalog, state::ProductState};

use common::{send, send_json};

fn app() -> Router {
    product_router(ProductState::new(Arc::new(StaticProductCatalog)))
}

#[tokio::test]
async fn health_is_ok() {
    let (status, text) = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "OK");
}

#[tokio::test]
async fn root_greets() {
    let (status, text) = send(&app(), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Products here");
}

#[tokio::test]
async fn products_are_fixed() {
    let app = app();
    let expected = json!([
        {"id": 1, "name": "Laptop"},
        {"id": 2, "name": "Phone"},
        {"id": 3, "name": "Tablet"}
    ]);

    let (status, body) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    let (status, _) = send(&app, Method::POST, "/products", Some(r#"{"id": 4, "name": "Watch"}"#)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (_, body) = send_json(&app, Method::GET, "/products", None).await;
    assert_eq!(body, expected);
}
