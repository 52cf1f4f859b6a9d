//! MongoDB implementation of the user repository.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{Role, SubscriptionRecord, User};
use crate::ports::UserRepository;

const COLLECTION: &str = "users";

/// User document as stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    email: String,
    name: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscription: Option<SubscriptionRecord>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            subscription: user.subscription.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = DomainError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let id = UserId::new(doc.id)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
        Ok(User {
            id,
            email: doc.email,
            name: doc.name,
            role: doc.role,
            subscription: doc.subscription,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

/// MongoDB-backed `UserRepository`.
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

fn db_error(e: mongodb::error::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, e.to_string())
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.as_str() })
            .await
            .map_err(db_error)?;

        document.map(User::try_from).transpose()
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let document = UserDocument::from(user);
        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, &document)
            .await
            .map_err(db_error)?;

        if result.matched_count == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User {} does not exist", user.id),
            ));
        }
        Ok(())
    }
}
