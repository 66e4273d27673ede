use std::sync::Arc;

use storefront::{app, config::ServiceConfig, logging, order_routes, repositories::InMemoryOrderRepository, server, state::OrderState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env("Order service")?;
    logging::init_logging(&config)?;

    let state = OrderState::new(Arc::new(InMemoryOrderRepository::new()));

    server::serve(app(order_routes(state)), &config).await
}
