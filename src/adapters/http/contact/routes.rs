//! Router configuration for the contact form.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::submit_contact_form;

/// Create the contact API router.
///
/// # Routes
/// - `POST /` - submit the contact form (public)
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_contact_form))
}
