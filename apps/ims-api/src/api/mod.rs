use axum::{Router, routing::get};

pub mod brands;
pub mod health;
pub mod products;

use crate::state::AppState;

/// Compose all domain routers.
///
/// Routes are mounted at the root: `/products`, `/brands`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(domain_products::entity::Model::URL, products::router(state))
        .nest("/brands", brands::router())
}

/// Readiness endpoint backed by a real database ping
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
