use axum::{routing::get, Router};

use super::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/payments/create", get(handlers::payments::create_payment))
        .route("/payments/return", get(handlers::payments::payment_return))
        .with_state(state)
}
