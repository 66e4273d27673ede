use serde::Serialize;

use crate::domain::{CartItem, Order, Product};

pub trait Response{}

#[derive(Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: Vec<CartItem>,
}
impl Response for CartResponse{}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CartItemsResponse {
    pub items: Vec<CartItem>,
}
impl Response for CartItemsResponse{}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: Order,
}
impl Response for CreateOrderResponse{}

#[derive(Serialize)]
#[serde(untagged)]
pub enum GetOrdersResponse {
    One(Order),
    All(Vec<Order>),
}
impl Response for GetOrdersResponse{}

#[derive(Serialize)]
#[serde(transparent)]
pub struct GetProductsResponse {
    pub products: Vec<Product>,
}
impl Response for GetProductsResponse{}

#[derive(Serialize)]
pub struct ApiError {
    pub message: String
}
impl Response for ApiError{}
