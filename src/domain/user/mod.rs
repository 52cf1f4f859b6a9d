//! User domain module.
//!
//! Holds identity, role, and the gateway-owned subscription record
//! mirrored onto each user.

mod account;
mod role;

pub use account::{SubscriptionRecord, User};
pub use role::Role;
