use std::sync::Arc;

use storefront::{app, config::ServiceConfig, logging, product_routes, repositories::StaticProductCatalog, server, state::ProductState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env("Product service")?;
    logging::init_logging(&config)?;

    let state = ProductState::new(Arc::new(StaticProductCatalog));

    server::serve(app(product_routes(state)), &config).await
}
