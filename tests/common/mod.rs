use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder.header(CONTENT_TYPE, "application/json").body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}
