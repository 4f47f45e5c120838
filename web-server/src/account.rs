//! Account, session, and saved-itinerary endpoints
//!
//! Session-gated surface: everything here except register/login requires a
//! valid (unexpired) session token. Tokens arrive as query parameters, the
//! way the original client sends them.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use wanderwise::auth::{new_password_hash, new_session_token, verify_password};
use wanderwise::database::UserProfile;
use wanderwise::ApiError;

use crate::response::ApiFailure;
use crate::validation::validate_registration;
use crate::AppState;

// ============================================================================
// Auth
// ============================================================================

#[derive(Deserialize)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub async fn register(
    State(state): State<AppState>,
    Query(params): Query<RegisterParams>,
) -> Result<Json<Value>, ApiFailure> {
    validate_registration(&params.email, &params.password, &params.name)
        .map_err(ApiFailure::from)?;

    let hash = new_password_hash(&params.password);
    let account = state
        .users
        .create_user(&params.email, &params.name, &hash)
        .await?;

    let session = state
        .users
        .create_session(account.user_id, &new_session_token())
        .await?;

    info!(email = %account.email, "account registered");

    Ok(Json(json!({
        "success": true,
        "user": UserProfile::from(&account),
        "session_token": session.session_token,
    })))
}

#[derive(Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state
        .users
        .find_by_email(&params.email)
        .await?
        .filter(|account| verify_password(&params.password, &account.password_hash))
        .ok_or_else(|| ApiFailure::from(ApiError::unauthorized("Invalid email or password")))?;

    let session = state
        .users
        .create_session(account.user_id, &new_session_token())
        .await?;

    Ok(Json(json!({
        "success": true,
        "user": UserProfile::from(&account),
        "session_token": session.session_token,
    })))
}

#[derive(Deserialize)]
pub struct TokenParams {
    pub session_token: String,
}

pub async fn verify(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;
    Ok(Json(json!({
        "success": true,
        "user": UserProfile::from(&account),
    })))
}

pub async fn logout(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, ApiFailure> {
    state.users.delete_session(&params.session_token).await?;
    Ok(Json(json!({ "success": true })))
}

// ============================================================================
// Saved itineraries
// ============================================================================

#[derive(Deserialize)]
pub struct SaveItineraryParams {
    pub session_token: String,
    pub title: String,
    pub destination: String,
    pub itinerary_data: String,
    pub travel_dates: String,
    pub preferences: String,
}

pub async fn save_itinerary(
    State(state): State<AppState>,
    Query(params): Query<SaveItineraryParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;

    // The client sends these sections as JSON-encoded query parameters
    let destination = parse_json_param("destination", &params.destination)?;
    let itinerary_data = parse_json_param("itinerary_data", &params.itinerary_data)?;
    let travel_dates = parse_json_param("travel_dates", &params.travel_dates)?;
    let preferences = parse_json_param("preferences", &params.preferences)?;

    let itinerary_id = state
        .itineraries
        .save(
            account.user_id,
            &params.title,
            &destination,
            &itinerary_data,
            &travel_dates,
            &preferences,
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "itinerary_id": itinerary_id,
    })))
}

pub async fn my_itineraries(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;
    let itineraries = state.itineraries.list_for_user(account.user_id).await?;
    Ok(Json(json!({
        "success": true,
        "itineraries": itineraries,
    })))
}

pub async fn delete_itinerary(
    State(state): State<AppState>,
    Path(itinerary_id): Path<String>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;

    let itinerary_id = Uuid::parse_str(&itinerary_id)
        .map_err(|_| ApiFailure::bad_request("Invalid itinerary id"))?;

    let deleted = state
        .itineraries
        .delete(account.user_id, itinerary_id)
        .await?;
    if !deleted {
        return Err(ApiFailure::from(ApiError::NotFound("itinerary")));
    }

    Ok(Json(json!({ "success": true })))
}

// ============================================================================
// User preferences
// ============================================================================

pub async fn get_preferences(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;
    let profile = UserProfile::from(&account);
    Ok(Json(json!({
        "success": true,
        "preferences": profile.preferences,
    })))
}

#[derive(Deserialize)]
pub struct UpdatePreferencesParams {
    pub session_token: String,
    pub preferred_currency: Option<String>,
    pub travel_style: Option<String>,
    pub budget_preference: Option<String>,
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Query(params): Query<UpdatePreferencesParams>,
) -> Result<Json<Value>, ApiFailure> {
    let account = state.users.resolve_session(&params.session_token).await?;

    state
        .users
        .update_preferences(
            account.user_id,
            params.preferred_currency.as_deref(),
            params.travel_style.as_deref(),
            params.budget_preference.as_deref(),
        )
        .await?;

    let refreshed = state
        .users
        .get_user(account.user_id)
        .await?
        .ok_or_else(|| ApiFailure::from(ApiError::NotFound("user")))?;

    Ok(Json(json!({
        "success": true,
        "preferences": UserProfile::from(&refreshed).preferences,
    })))
}

fn parse_json_param(field: &str, raw: &str) -> Result<Value, ApiFailure> {
    serde_json::from_str(raw)
        .map_err(|_| ApiFailure::bad_request(format!("{} is not valid JSON", field)))
}
