//! Account and session repository
//!
//! Users are relational rows (email is unique); sessions map an opaque
//! token to a user with a hard expiry. Expired sessions are deleted when
//! detected rather than swept by a background job.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::auth::SESSION_TTL_HOURS;
use crate::error::ApiError;

/// A registered account row
#[derive(Debug, Clone, FromRow)]
pub struct UserAccount {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub preferred_currency: Option<String>,
    pub travel_style: Option<String>,
    pub budget_preference: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Account shape returned to clients - no hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub preferred_currency: Option<String>,
    pub travel_style: Option<String>,
    pub budget_preference: Option<String>,
}

impl From<&UserAccount> for UserProfile {
    fn from(account: &UserAccount) -> Self {
        Self {
            user_id: account.user_id,
            email: account.email.clone(),
            name: account.name.clone(),
            preferences: UserPreferences {
                preferred_currency: account.preferred_currency.clone(),
                travel_style: account.travel_style.clone(),
                budget_preference: account.budget_preference.clone(),
            },
        }
    }
}

/// A session row
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub session_token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Repository for accounts and their sessions
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an account; fails with Validation if the email is taken
    pub async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<UserAccount, ApiError> {
        if self.find_by_email(email).await?.is_some() {
            return Err(ApiError::validation("Email already registered"));
        }

        let user_id = Uuid::new_v4();
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO wanderwise.users
                (user_id, email, name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(UserAccount {
            user_id,
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            preferred_currency: None,
            travel_style: None,
            budget_preference: None,
            created_at: now,
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, sqlx::Error> {
        sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT user_id, email, name, password_hash,
                   preferred_currency, travel_style, budget_preference, created_at
            FROM wanderwise.users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<UserAccount>, sqlx::Error> {
        sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT user_id, email, name, password_hash,
                   preferred_currency, travel_style, budget_preference, created_at
            FROM wanderwise.users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Merge non-None fields into the stored preferences
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        preferred_currency: Option<&str>,
        travel_style: Option<&str>,
        budget_preference: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE wanderwise.users
            SET preferred_currency = COALESCE($2, preferred_currency),
                travel_style = COALESCE($3, travel_style),
                budget_preference = COALESCE($4, budget_preference)
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(preferred_currency)
        .bind(travel_style)
        .bind(budget_preference)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Create a session for a user with the standard TTL
    pub async fn create_session(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<AuthSession, sqlx::Error> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(SESSION_TTL_HOURS);
        sqlx::query(
            r#"
            INSERT INTO wanderwise.sessions
                (session_token, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(AuthSession {
            session_token: token.to_string(),
            user_id,
            created_at: now,
            expires_at,
        })
    }

    pub async fn find_session(&self, token: &str) -> Result<Option<AuthSession>, sqlx::Error> {
        sqlx::query_as::<_, AuthSession>(
            r#"
            SELECT session_token, user_id, created_at, expires_at
            FROM wanderwise.sessions
            WHERE session_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_session(&self, token: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM wanderwise.sessions WHERE session_token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Resolve a token to its account, deleting the session if expired
    pub async fn resolve_session(&self, token: &str) -> Result<UserAccount, ApiError> {
        let session = self
            .find_session(token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid session token"))?;

        if session.is_expired() {
            self.delete_session(token).await?;
            return Err(ApiError::unauthorized("Session expired"));
        }

        self.get_user(session.user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Session user no longer exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry_check() {
        let live = AuthSession {
            session_token: "token".to_string(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!live.is_expired());

        let stale = AuthSession {
            expires_at: Utc::now() - Duration::seconds(1),
            ..live
        };
        assert!(stale.is_expired());
    }

    #[test]
    fn test_profile_hides_password_hash() {
        let account = UserAccount {
            user_id: Uuid::new_v4(),
            email: "traveler@example.com".to_string(),
            name: "Traveler".to_string(),
            password_hash: "salt$hash".to_string(),
            preferred_currency: Some("EUR".to_string()),
            travel_style: None,
            budget_preference: None,
            created_at: Utc::now(),
        };
        let profile = UserProfile::from(&account);
        let doc = serde_json::to_value(&profile).unwrap();
        assert!(doc.get("password_hash").is_none());
        assert_eq!(doc["preferences"]["preferred_currency"], "EUR");
    }
}
