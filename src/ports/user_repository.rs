//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository port for user documents.
///
/// Each read-modify-write of the subscription sub-document goes through
/// `find_by_id` followed by `update`; the document store's per-document
/// atomicity is the only concurrency control. Two concurrent writers for the
/// same user race last-writer-wins.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id. Returns `None` if unknown.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Persist the current state of an existing user.
    async fn update(&self, user: &User) -> Result<(), DomainError>;
}
