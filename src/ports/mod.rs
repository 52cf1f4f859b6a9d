//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports, and every
//! application handler receives them as injected `Arc<dyn ...>` dependencies
//! so tests can substitute fakes.
//!
//! - `PaymentGateway` - subscription create/cancel/list at the payment SaaS
//! - `UserRepository` - user documents with the subscription sub-document
//! - `PaymentLedger` - append-only verified payment records
//! - `CourseRepository` - course documents with embedded lectures
//! - `MediaStorage` - external media upload/delete
//! - `Mailer` - outbound contact-form relay

mod course_repository;
mod mailer;
mod media_storage;
mod payment_gateway;
mod payment_ledger;
mod user_repository;

pub use course_repository::{CourseRepository, CourseSummary};
pub use mailer::Mailer;
pub use media_storage::{MediaStorage, MediaUpload};
pub use payment_gateway::{
    CreateSubscriptionRequest, GatewayError, GatewayErrorCode, GatewaySubscription,
    PaymentGateway, SubscriptionSummary,
};
pub use payment_ledger::PaymentLedger;
pub use user_repository::UserRepository;
