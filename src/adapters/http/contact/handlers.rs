//! HTTP handlers for the contact form.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::contact::SubmitContactFormCommand;

use super::dto::{ContactRequest, ContactResponse};

/// POST /api/v1/contact
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .submit_contact_form_handler()
        .handle(SubmitContactFormCommand {
            name: request.name,
            email: request.email,
            message: request.message,
        })
        .await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Form submitted successfully".to_string(),
    }))
}
