use std::sync::Arc;

use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    cqrs::{
        AddItemToCartCommand, CommandHandler, CreateOrderCommand, GetCartQuery, GetOrdersQuery, GetProductsQuery,
        QueryHandler, RemoveItemFromCartCommand,
    },
    dtos::ApiError,
    errors::ServiceError,
    state::{CartState, OrderState, ProductState},
};

type ApiResult = (StatusCode, Json<Value>);

fn error_response(e: ServiceError) -> ApiResult {
    (e.status_code(), Json(json!(ApiError { message: e.to_string() })))
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ServiceError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ServiceError::MalformedBody(rejection.body_text()))
}

fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<String, ServiceError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ServiceError::MalformedPath(rejection.body_text()))
}

// cart

pub async fn get_cart(State(state): State<Arc<CartState>>) -> ApiResult {
    match state.get_cart_query_handler.handle(Some(GetCartQuery {})).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

pub async fn add_item_to_cart(State(state): State<Arc<CartState>>, body: Result<Json<Value>, JsonRejection>) -> ApiResult {
    let command = match parse_body(body) {
        Ok(payload) => AddItemToCartCommand { payload },
        Err(e) => return error_response(e),
    };

    match state.add_item_to_cart_command_handler.handle(&command).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

pub async fn remove_item_from_cart(id: Result<Path<String>, PathRejection>, State(state): State<Arc<CartState>>) -> ApiResult {
    let command = match parse_id(id) {
        Ok(id) => RemoveItemFromCartCommand { id },
        Err(e) => return error_response(e),
    };

    match state.remove_item_from_cart_command_handler.handle(&command).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

// orders

pub async fn create_order(State(state): State<Arc<OrderState>>, body: Result<Json<Value>, JsonRejection>) -> ApiResult {
    // a request without a JSON content type carries no order fields
    let body = match body {
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Json(Value::Null)),
        other => other,
    };

    let command = match parse_body(body) {
        Ok(payload) => CreateOrderCommand { payload },
        Err(e) => return error_response(e),
    };

    match state.create_order_command_handler.handle(&command).await {
        Ok(response) => (StatusCode::CREATED, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

pub async fn get_orders(State(state): State<Arc<OrderState>>) -> ApiResult {
    match state.get_orders_query_handler.handle(None).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

pub async fn get_order_by_id(id: Result<Path<String>, PathRejection>, State(state): State<Arc<OrderState>>) -> ApiResult {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match state.get_orders_query_handler.handle(Some(GetOrdersQuery { id })).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}

// products

pub async fn health() -> &'static str {
    "OK"
}

pub async fn index() -> &'static str {
    "Products here"
}

pub async fn get_products(State(state): State<Arc<ProductState>>) -> ApiResult {
    match state.get_products_query_handler.handle(Some(GetProductsQuery {})).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => error_response(e),
    }
}
