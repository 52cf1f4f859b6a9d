//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Razorpay subscriptions
//! API, plus a mock implementation for tests and local development.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let gateway = RazorpayGatewayAdapter::new(config);
//! ```

mod gateway_adapter;
mod mock_gateway;

pub use gateway_adapter::{RazorpayConfig, RazorpayGatewayAdapter};
pub use mock_gateway::MockPaymentGateway;
