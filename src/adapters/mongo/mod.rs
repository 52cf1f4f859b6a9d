//! MongoDB adapters.
//!
//! Implements the repository ports against MongoDB collections:
//!
//! - `users` - user documents with the embedded subscription record
//! - `payments` - append-only verified payment records
//! - `courses` - course documents with embedded lectures
//!
//! Each adapter maps between domain types and collection documents at the
//! boundary; the domain never sees BSON.

mod course_repository;
mod payment_ledger;
mod user_repository;

pub use course_repository::MongoCourseRepository;
pub use payment_ledger::MongoPaymentLedger;
pub use user_repository::MongoUserRepository;

use mongodb::{Client, Database};

use crate::config::DatabaseConfig;

/// Connect to MongoDB and select the configured database.
///
/// A failed connection here is fatal to the service: callers are expected
/// to exit the process, since nothing works without the document store.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.url).await?;
    let database = client.database(&config.name);

    // Round-trip a ping so a bad URL fails at startup, not on first request.
    database
        .run_command(mongodb::bson::doc! { "ping": 1 })
        .await?;

    tracing::info!(database = %config.name, "database connected");
    Ok(database)
}
