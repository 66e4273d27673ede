use std::sync::Arc;

use axum::{http::Method, routing::{delete, get}, Router};
use axum_prometheus::PrometheusMetricLayer;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{event, Level};

use crate::{
    config::ServiceConfig,
    routes::{add_item_to_cart, create_order, get_cart, get_order_by_id, get_orders, get_products, health, index, remove_item_from_cart},
    state::{CartState, OrderState, ProductState},
};

pub fn with_http_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive().allow_methods([Method::GET, Method::POST, Method::DELETE]))
    )
}

/// Adds `GET /metrics` and request metrics for every route registered so far.
///
/// Installs the global Prometheus recorder, so call it once per process.
pub fn with_metrics(router: Router) -> Router {
    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();

    router
        .route("/metrics", get(|| async move {metrics_handle.render()}))
        .layer(prometheus_layer)
}

pub fn cart_routes(state: CartState) -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_item_to_cart))
        .route("/cart/{id}", delete(remove_item_from_cart))
        .with_state(Arc::new(state))
}

pub fn order_routes(state: OrderState) -> Router {
    Router::new()
        .route("/orders", get(get_orders).post(create_order))
        .route("/orders/{id}", get(get_order_by_id))
        .with_state(Arc::new(state))
}

pub fn product_routes(state: ProductState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/products", get(get_products))
        .with_state(Arc::new(state))
}

pub fn cart_router(state: CartState) -> Router {
    with_http_layers(cart_routes(state))
}

pub fn order_router(state: OrderState) -> Router {
    with_http_layers(order_routes(state))
}

pub fn product_router(state: ProductState) -> Router {
    with_http_layers(product_routes(state))
}

/// Full service: routes plus `/metrics`, all behind the Trace and CORS layers.
pub fn app(routes: Router) -> Router {
    with_http_layers(with_metrics(routes))
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(app: Router, config: &ServiceConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    event!(Level::INFO, "{} running on port {}", config.service_name, config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    event!(Level::INFO, "{} stopped", config.service_name);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            event!(Level::ERROR, "failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                event!(Level::ERROR, "failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => event!(Level::INFO, "ctrl_c signal received"),
        _ = terminate => event!(Level::INFO, "terminate signal received"),
    }
}
