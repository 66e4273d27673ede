use std::sync::Arc;

use crate::cqrs::{
    AddItemToCartCommandHandler, CreateOrderCommandHandler, GetCartQueryHandler, GetOrdersQueryHandler,
    GetProductsQueryHandler, RemoveItemFromCartCommandHandler, SharedCartRepository, SharedOrderRepository,
    SharedProductRepository,
};

#[derive(Clone)]
pub struct CartState {
    pub add_item_to_cart_command_handler: Arc<AddItemToCartCommandHandler>,
    pub remove_item_from_cart_command_handler: Arc<RemoveItemFromCartCommandHandler>,
    pub get_cart_query_handler: Arc<GetCartQueryHandler>,
}

impl CartState {
    pub fn new(cart_repository: SharedCartRepository) -> Self {
        CartState {
            add_item_to_cart_command_handler: Arc::new(AddItemToCartCommandHandler::new(cart_repository.clone())),
            remove_item_from_cart_command_handler: Arc::new(RemoveItemFromCartCommandHandler::new(cart_repository.clone())),
            get_cart_query_handler: Arc::new(GetCartQueryHandler::new(cart_repository)),
        }
    }
}

#[derive(Clone)]
pub struct OrderState {
    pub create_order_command_handler: Arc<CreateOrderCommandHandler>,
    pub get_orders_query_handler: Arc<GetOrdersQueryHandler>,
}

impl OrderState {
    pub fn new(order_repository: SharedOrderRepository) -> Self {
        OrderState {
            create_order_command_handler: Arc::new(CreateOrderCommandHandler::new(order_repository.clone())),
            get_orders_query_handler: Arc::new(GetOrdersQueryHandler::new(order_repository)),
        }
    }
}

#[derive(Clone)]
pub struct ProductState {
    pub get_products_query_handler: Arc<GetProductsQueryHandler>,
}

impl ProductState {
    pub fn new(product_repository: SharedProductRepository) -> Self {
        ProductState {
            get_products_query_handler: Arc::new(GetProductsQueryHandler::new(product_repository)),
        }
    }
}
