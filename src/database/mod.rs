//! Database access
//!
//! All persistence goes through a Postgres pool: advisory results as
//! append-only JSONB documents, accounts and sessions as relational rows.
//! Queries are runtime-bound, so the crate builds without a live database.

mod document_store;
mod itinerary_repository;
mod user_repository;

pub use document_store::{Collection, DocumentStore};
pub use itinerary_repository::{ItineraryRepository, SavedItinerary};
pub use user_repository::{AuthSession, UserAccount, UserProfile, UserRepository};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect a pool against DATABASE_URL-style connection string
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
