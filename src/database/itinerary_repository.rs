//! Saved itinerary repository
//!
//! The one collection with a delete path: a user may remove an itinerary
//! they saved. Deletion is scoped to the owning user; everything else is
//! append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A saved itinerary row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedItinerary {
    pub itinerary_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub destination: Value,
    pub itinerary_data: Value,
    pub travel_dates: Value,
    pub preferences: Value,
    pub created_at: DateTime<Utc>,
}

/// Repository for user-saved itineraries
pub struct ItineraryRepository {
    pool: PgPool,
}

impl ItineraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Save an itinerary for a user, returns the new id
    pub async fn save(
        &self,
        user_id: Uuid,
        title: &str,
        destination: &Value,
        itinerary_data: &Value,
        travel_dates: &Value,
        preferences: &Value,
    ) -> Result<Uuid, sqlx::Error> {
        let itinerary_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO wanderwise.saved_itineraries
                (itinerary_id, user_id, title, destination, itinerary_data,
                 travel_dates, preferences, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            "#,
        )
        .bind(itinerary_id)
        .bind(user_id)
        .bind(title)
        .bind(destination)
        .bind(itinerary_data)
        .bind(travel_dates)
        .bind(preferences)
        .execute(&self.pool)
        .await?;
        Ok(itinerary_id)
    }

    /// All itineraries saved by a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SavedItinerary>, sqlx::Error> {
        sqlx::query_as::<_, SavedItinerary>(
            r#"
            SELECT itinerary_id, user_id, title, destination, itinerary_data,
                   travel_dates, preferences, created_at
            FROM wanderwise.saved_itineraries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Delete an itinerary owned by the user; false if nothing matched
    pub async fn delete(&self, user_id: Uuid, itinerary_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM wanderwise.saved_itineraries
            WHERE itinerary_id = $1 AND user_id = $2
            "#,
        )
        .bind(itinerary_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
