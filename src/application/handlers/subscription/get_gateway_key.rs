//! GetGatewayKeyHandler - query handler for the gateway publishable key.

/// Result carrying the publishable key id for client-side checkout.
#[derive(Debug, Clone)]
pub struct GetGatewayKeyResult {
    pub key: String,
}

/// Handler returning the gateway's publishable key identifier.
///
/// The key comes from configuration; there are no side effects and no
/// authorization beyond being an authenticated caller.
pub struct GetGatewayKeyHandler {
    key_id: String,
}

impl GetGatewayKeyHandler {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    pub fn handle(&self) -> GetGatewayKeyResult {
        GetGatewayKeyResult {
            key: self.key_id.clone(),
        }
    }
}
