//! HTTP handlers for the payment endpoints.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::middleware::{AdminUser, AuthenticatedUser};
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::subscription::{
    CancelSubscriptionCommand, CreateSubscriptionCommand, ListPaymentsQuery,
    VerifySubscriptionCommand,
};

use super::dto::{
    GatewayKeyResponse, ListPaymentsParams, ListPaymentsResponse, SubscribeResponse,
    SubscriptionSummaryResponse, UnsubscribeResponse, VerifyRequest, VerifyResponse,
};

/// GET /api/v1/payments/key
pub async fn get_gateway_key(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.get_gateway_key_handler().handle();

    Ok(Json(GatewayKeyResponse {
        success: true,
        message: "Gateway API key".to_string(),
        key: result.key,
    }))
}

/// POST /api/v1/payments/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_subscription_handler();
    let result = handler
        .handle(CreateSubscriptionCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(SubscribeResponse {
        success: true,
        message: "Subscribed successfully".to_string(),
        subscription_id: result.subscription_id,
    }))
}

/// POST /api/v1/payments/verify
pub async fn verify(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<VerifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.verify_subscription_handler();
    handler
        .handle(VerifySubscriptionCommand {
            user_id: user.user_id,
            payment_id: request.razorpay_payment_id,
            signature: request.razorpay_signature,
            subscription_id: request.razorpay_subscription_id,
        })
        .await?;

    Ok(Json(VerifyResponse {
        success: true,
        message: "Payment verified successfully".to_string(),
    }))
}

/// POST /api/v1/payments/unsubscribe
///
/// Returns an explicit success body with the mirrored gateway status.
pub async fn unsubscribe(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.cancel_subscription_handler();
    let result = handler
        .handle(CancelSubscriptionCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(UnsubscribeResponse {
        success: true,
        message: "Subscription cancelled".to_string(),
        status: result.status,
    }))
}

/// GET /api/v1/payments?count=N (admin)
pub async fn list_payments(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<ListPaymentsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_payments_handler();
    let result = handler
        .handle(ListPaymentsQuery {
            count: params.count,
        })
        .await?;

    Ok(Json(ListPaymentsResponse {
        success: true,
        message: "All payments".to_string(),
        subscriptions: result
            .subscriptions
            .into_iter()
            .map(SubscriptionSummaryResponse::from)
            .collect(),
    }))
}
