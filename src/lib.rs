//! Cart, order and product services.
//!
//! Each service is an axum router over one in-memory collection. The binaries
//! under `src/bin` wire a router to its store, configuration and logging.

pub mod config;
pub mod cqrs;
pub mod domain;
pub mod dtos;
pub mod errors;
pub mod logging;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{app, cart_router, cart_routes, order_router, order_routes, product_router, product_routes};
