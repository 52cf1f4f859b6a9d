//! HTTP adapters - REST API implementation.
//!
//! Each domain module has its own route/handler/DTO files; they all share
//! one `AppState` carrying the injected port implementations and the
//! configuration the payment core needs.

pub mod contact;
pub mod course;
pub mod error;
pub mod middleware;
pub mod payment;

pub use error::{ApiError, ErrorResponse};

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use jsonwebtoken::DecodingKey;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::contact::SubmitContactFormHandler;
use crate::application::handlers::course::{
    AddLectureHandler, CreateCourseHandler, GetCourseLecturesHandler, ListCoursesHandler,
    RemoveCourseHandler, RemoveLectureHandler, UpdateCourseHandler,
};
use crate::application::handlers::subscription::{
    CancelSubscriptionHandler, CreateSubscriptionHandler, GetGatewayKeyHandler,
    ListPaymentsHandler, VerifySubscriptionHandler,
};
use crate::config::AppConfig;
use crate::domain::subscription::PaymentSignatureVerifier;
use crate::ports::{
    CourseRepository, Mailer, MediaStorage, PaymentGateway, PaymentLedger, UserRepository,
};

/// Shared application state.
///
/// Cloned per request; all dependencies are Arc-wrapped ports so tests can
/// substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub ledger: Arc<dyn PaymentLedger>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub media: Arc<dyn MediaStorage>,
    pub mailer: Arc<dyn Mailer>,
    pub jwt_decoding_key: Arc<DecodingKey>,
    pub gateway_key_id: String,
    pub gateway_plan_id: String,
    pub billing_cycles: u32,
    pub hmac_secret: String,
}

impl AppState {
    // Handler factories, created on demand from the shared state.

    pub fn get_gateway_key_handler(&self) -> GetGatewayKeyHandler {
        GetGatewayKeyHandler::new(self.gateway_key_id.clone())
    }

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(
            self.users.clone(),
            self.gateway.clone(),
            self.gateway_plan_id.clone(),
            self.billing_cycles,
        )
    }

    pub fn verify_subscription_handler(&self) -> VerifySubscriptionHandler {
        VerifySubscriptionHandler::new(
            self.users.clone(),
            self.ledger.clone(),
            PaymentSignatureVerifier::new(self.hmac_secret.clone()),
        )
    }

    pub fn cancel_subscription_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.users.clone(), self.gateway.clone())
    }

    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.gateway.clone())
    }

    pub fn list_courses_handler(&self) -> ListCoursesHandler {
        ListCoursesHandler::new(self.courses.clone())
    }

    pub fn get_course_lectures_handler(&self) -> GetCourseLecturesHandler {
        GetCourseLecturesHandler::new(self.courses.clone(), self.users.clone())
    }

    pub fn create_course_handler(&self) -> CreateCourseHandler {
        CreateCourseHandler::new(self.courses.clone(), self.media.clone())
    }

    pub fn update_course_handler(&self) -> UpdateCourseHandler {
        UpdateCourseHandler::new(self.courses.clone())
    }

    pub fn remove_course_handler(&self) -> RemoveCourseHandler {
        RemoveCourseHandler::new(self.courses.clone(), self.media.clone())
    }

    pub fn add_lecture_handler(&self) -> AddLectureHandler {
        AddLectureHandler::new(self.courses.clone(), self.media.clone())
    }

    pub fn remove_lecture_handler(&self) -> RemoveLectureHandler {
        RemoveLectureHandler::new(self.courses.clone(), self.media.clone())
    }

    pub fn submit_contact_form_handler(&self) -> SubmitContactFormHandler {
        SubmitContactFormHandler::new(self.mailer.clone())
    }
}

/// Assemble the complete application router.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .allow_credentials(true);

    Router::new()
        .route("/ping", get(ping))
        .nest("/api/v1/payments", payment::payment_routes())
        .nest("/api/v1/courses", course::course_routes())
        .nest("/api/v1/contact", contact::contact_routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn ping() -> &'static str {
    "/pong"
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}
