use std::sync::Arc;

use storefront::{app, cart_routes, config::ServiceConfig, logging, repositories::InMemoryCartRepository, server, state::CartState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env("Cart service")?;
    logging::init_logging(&config)?;

    let state = CartState::new(Arc::new(InMemoryCartRepository::new()));

    server::serve(app(cart_routes(state)), &config).await
}
