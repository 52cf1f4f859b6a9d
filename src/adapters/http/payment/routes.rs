//! Router configuration for the payment endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{get_gateway_key, list_payments, subscribe, unsubscribe, verify};

/// Create the payment API router.
///
/// # Routes
///
/// ## Authenticated endpoints
/// - `GET /key` - gateway publishable key
/// - `POST /subscribe` - create a subscription (non-admin)
/// - `POST /verify` - verify a payment signature
/// - `POST /unsubscribe` - cancel the subscription (non-admin)
///
/// ## Admin endpoints
/// - `GET /` - list gateway subscriptions (`?count=N`)
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments))
        .route("/key", get(get_gateway_key))
        .route("/subscribe", post(subscribe))
        .route("/verify", post(verify))
        .route("/unsubscribe", post(unsubscribe))
}
