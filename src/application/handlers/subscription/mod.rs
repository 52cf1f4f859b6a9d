//! Subscription manager handlers - the payment core.
//!
//! ## Commands
//! - Creating a gateway subscription for an eligible caller
//! - Verifying a payment signature and appending to the ledger
//! - Cancelling a subscription and mirroring the gateway status
//!
//! ## Queries
//! - Fetching the gateway's publishable key
//! - Listing gateway-side payment/subscription summaries (admin)

mod cancel_subscription;
mod create_subscription;
mod get_gateway_key;
mod list_payments;
mod verify_subscription;

// Commands
pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use verify_subscription::{
    VerifySubscriptionCommand, VerifySubscriptionHandler, VerifySubscriptionResult,
};

// Queries
pub use get_gateway_key::{GetGatewayKeyHandler, GetGatewayKeyResult};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery, ListPaymentsResult};
