use axum::{Router, routing::get};

use crate::db::DbPool;

pub mod analytics;
pub mod doc;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tokens;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .nest("/menu", menu::router())
        .nest("/orders", orders::router())
        .nest("/tokens", tokens::router())
        .nest("/analytics", analytics::router())
        .route("/health", get(health::health_check))
}
