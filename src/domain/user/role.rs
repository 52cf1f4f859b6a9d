//! User roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// Admins manage course content; subscribers purchase access to it.
/// Admins are never eligible to hold a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Subscriber,
    Admin,
}

impl Role {
    /// Returns true if this role may purchase or cancel a subscription.
    pub fn can_hold_subscription(&self) -> bool {
        matches!(self, Role::Subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_can_hold_subscription() {
        assert!(Role::Subscriber.can_hold_subscription());
    }

    #[test]
    fn admin_cannot_hold_subscription() {
        assert!(!Role::Admin.can_hold_subscription());
    }

    #[test]
    fn role_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&Role::Subscriber).unwrap(),
            "\"SUBSCRIBER\""
        );
    }
}
