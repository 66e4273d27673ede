mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use storefront::{app, product_routes, repositories::StaticProductCatalog, state::ProductState};

use common::send;

// one test per process: the Prometheus recorder is global
#[tokio::test]
async fn metrics_endpoint_counts_served_requests() {
    let app = app(product_routes(ProductState::new(Arc::new(StaticProductCatalog))));

    let (status, _) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = send(&app, Method::GET, "/metrics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("axum_http_requests_total"), "metrics output was: {}", text);
    assert!(text.contains("/products"));
}
