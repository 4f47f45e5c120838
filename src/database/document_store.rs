//! Document store over Postgres JSONB
//!
//! Advisory results are persisted as whole documents, one table per
//! collection under the `wanderwise` schema. The interface is append-only:
//! insert and read, no update path. Table names come from a closed enum,
//! never from caller strings.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

/// The document collections the platform writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    TravelRecommendations,
    ReviewAnalyses,
    VibeDestinations,
}

impl Collection {
    /// Fully qualified table name
    pub fn table(&self) -> &'static str {
        match self {
            Collection::TravelRecommendations => "wanderwise.travel_recommendations",
            Collection::ReviewAnalyses => "wanderwise.review_analyses",
            Collection::VibeDestinations => "wanderwise.vibe_destinations",
        }
    }
}

/// Append-only JSONB document store
pub struct DocumentStore {
    pool: PgPool,
}

impl DocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert one document, returns its id
    pub async fn insert(
        &self,
        collection: Collection,
        id: Uuid,
        doc: &Value,
    ) -> Result<Uuid, sqlx::Error> {
        let sql = format!(
            "INSERT INTO {} (doc_id, doc, created_at) VALUES ($1, $2, NOW())",
            collection.table()
        );
        sqlx::query(&sql).bind(id).bind(doc).execute(&self.pool).await?;
        Ok(id)
    }

    /// Most recent documents in a collection, newest first
    pub async fn recent(
        &self,
        collection: Collection,
        limit: i64,
    ) -> Result<Vec<Value>, sqlx::Error> {
        let sql = format!(
            "SELECT doc FROM {} ORDER BY created_at DESC LIMIT $1",
            collection.table()
        );
        sqlx::query_scalar::<_, Value>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    /// Review analyses whose text mentions the destination, newest first
    pub async fn reviews_mentioning(
        &self,
        destination: &str,
        limit: i64,
    ) -> Result<Vec<Value>, sqlx::Error> {
        let pattern = format!("%{}%", destination);
        sqlx::query_scalar::<_, Value>(
            r#"
            SELECT doc FROM wanderwise.review_analyses
            WHERE doc->>'review_text' ILIKE $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
