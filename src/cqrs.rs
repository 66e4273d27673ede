use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{event, Level};

use crate::{
    domain::{CartItem, NewOrder, RecordId},
    dtos::{CartItemsResponse, CartResponse, CreateOrderResponse, GetOrdersResponse, GetProductsResponse, Response},
    errors::ServiceError,
    repositories::{CartRepository, OrderRepository, ProductRepository},
};

// traits
pub trait Command{}
pub trait Query{}

pub trait CommandHandler<C: Command, R: Response>{
    async fn handle(&self, input: &C) -> Result<R, ServiceError>;
}

pub trait QueryHandler<Q: Query, R: Response>{
    async fn handle(&self, input: Option<Q>) -> Result<R, ServiceError>;
}

pub type SharedCartRepository = Arc<dyn CartRepository + Send + Sync>;
pub type SharedOrderRepository = Arc<dyn OrderRepository + Send + Sync>;
pub type SharedProductRepository = Arc<dyn ProductRepository + Send + Sync>;

/// Raw client payload; the handler validates it into a `CartItem`.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct AddItemToCartCommand {
    pub payload: Value,
}
impl Command for AddItemToCartCommand{}

#[derive(Deserialize)]
pub struct RemoveItemFromCartCommand {
    pub id: String,
}
impl Command for RemoveItemFromCartCommand{}

#[derive(Deserialize)]
pub struct GetCartQuery {}
impl Query for GetCartQuery{}

#[derive(Deserialize)]
#[serde(transparent)]
pub struct CreateOrderCommand {
    pub payload: Value,
}
impl Command for CreateOrderCommand{}

#[derive(Deserialize)]
pub struct GetOrdersQuery {
    pub id: String,
}
impl Query for GetOrdersQuery{}

#[derive(Deserialize)]
pub struct GetProductsQuery {}
impl Query for GetProductsQuery{}

pub struct AddItemToCartCommandHandler {
    cart_repository: SharedCartRepository,
}

impl AddItemToCartCommandHandler {
    pub fn new(cart_repository: SharedCartRepository) -> Self {
        AddItemToCartCommandHandler { cart_repository }
    }
}

impl CommandHandler<AddItemToCartCommand, CartResponse> for AddItemToCartCommandHandler {
    async fn handle(&self, input: &AddItemToCartCommand) -> Result<CartResponse, ServiceError> {
        let item = CartItem::try_from(input.payload.clone()).inspect_err(|e| {
            event!(Level::WARN, "Rejected cart item: {}", e);
        })?;

        event!(Level::DEBUG, "adding cart item {}", item.id);
        let cart = self.cart_repository.add(item).await?;

        Ok(CartResponse {
            message: String::from("Item added to cart"),
            cart,
        })
    }
}

pub struct RemoveItemFromCartCommandHandler {
    cart_repository: SharedCartRepository,
}

impl RemoveItemFromCartCommandHandler {
    pub fn new(cart_repository: SharedCartRepository) -> Self {
        RemoveItemFromCartCommandHandler { cart_repository }
    }
}

impl CommandHandler<RemoveItemFromCartCommand, CartResponse> for RemoveItemFromCartCommandHandler {
    async fn handle(&self, input: &RemoveItemFromCartCommand) -> Result<CartResponse, ServiceError> {
        let cart = self.cart_repository.delete(&RecordId::from_path(&input.id)).await?;

        Ok(CartResponse {
            message: String::from("Item removed"),
            cart,
        })
    }
}

pub struct GetCartQueryHandler {
    cart_repository: SharedCartRepository,
}

impl GetCartQueryHandler {
    pub fn new(cart_repository: SharedCartRepository) -> Self {
        GetCartQueryHandler { cart_repository }
    }
}

impl QueryHandler<GetCartQuery, CartItemsResponse> for GetCartQueryHandler {
    async fn handle(&self, _input: Option<GetCartQuery>) -> Result<CartItemsResponse, ServiceError> {
        Ok(CartItemsResponse {
            items: self.cart_repository.read_all().await?,
        })
    }
}

pub struct CreateOrderCommandHandler {
    order_repository: SharedOrderRepository,
}

impl CreateOrderCommandHandler {
    pub fn new(order_repository: SharedOrderRepository) -> Self {
        CreateOrderCommandHandler { order_repository }
    }
}

impl CommandHandler<CreateOrderCommand, CreateOrderResponse> for CreateOrderCommandHandler {
    async fn handle(&self, input: &CreateOrderCommand) -> Result<CreateOrderResponse, ServiceError> {
        let draft = NewOrder::try_from(input.payload.clone()).inspect_err(|e| {
            event!(Level::WARN, "Rejected order: {}", e);
        })?;

        let order = self.order_repository.create(draft).await?;
        event!(Level::INFO, "created order {}", order.id);

        Ok(CreateOrderResponse {
            message: String::from("Order created successfully"),
            order,
        })
    }
}

pub struct GetOrdersQueryHandler {
    order_repository: SharedOrderRepository,
}

impl GetOrdersQueryHandler {
    pub fn new(order_repository: SharedOrderRepository) -> Self {
        GetOrdersQueryHandler { order_repository }
    }
}

impl QueryHandler<GetOrdersQuery, GetOrdersResponse> for GetOrdersQueryHandler {
    async fn handle(&self, input_option: Option<GetOrdersQuery>) -> Result<GetOrdersResponse, ServiceError> {
        match input_option {
            Some(input) => {
                match self.order_repository.read(&RecordId::from_path(&input.id)).await {
                    Ok(order) => Ok(GetOrdersResponse::One(order)),
                    Err(e) => {
                        event!(Level::WARN, "Error occurred while finding order {}: {}", input.id, e);
                        Err(e)
                    }
                }
            },
            None => Ok(GetOrdersResponse::All(self.order_repository.read_all().await?)),
        }
    }
}

pub struct GetProductsQueryHandler {
    product_repository: SharedProductRepository,
}

impl GetProductsQueryHandler {
    pub fn new(product_repository: SharedProductRepository) -> Self {
        GetProductsQueryHandler { product_repository }
    }
}

impl QueryHandler<GetProductsQuery, GetProductsResponse> for GetProductsQueryHandler {
    async fn handle(&self, _input: Option<GetProductsQuery>) -> Result<GetProductsResponse, ServiceError> {
        Ok(GetProductsResponse {
            products: self.product_repository.read_all().await?,
        })
    }
}
