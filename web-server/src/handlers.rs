//! Advisory and lookup endpoints
//!
//! Each advisory handler validates input, runs one orchestration, persists
//! the record kinds that are stored, and replies `{success: true, ...}`
//! with the provenance flag. A model-path failure never surfaces as an
//! HTTP error - the orchestrator has already substituted a fallback
//! result by the time the handler sees it.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use wander_agentic::task::{
    ActivityQuery, DestinationQuery, DurationQuery, ReviewRequest, TaskInput, VibeQuery,
};
use wander_agentic::{BudgetRange, DestinationType, TravelPreferences, TravelStyle};
use wanderwise::models::{ReviewAnalysis, TravelRecommendation, VibeDestination};
use wanderwise::{lookup, ApiError, Collection};

use crate::response::ApiFailure;
use crate::validation::{validate_duration, validate_review_text};
use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "WanderWise AI Travel Platform API",
        "version": "1.0.0"
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "success": true, "status": "OK" }))
}

// ============================================================================
// Vibe matching
// ============================================================================

#[derive(Deserialize)]
pub struct VibeMatchParams {
    pub vibe_query: String,
    pub destination_type: Option<String>,
    pub budget: Option<String>,
}

pub async fn vibe_match(
    State(state): State<AppState>,
    Query(params): Query<VibeMatchParams>,
) -> Result<Json<Value>, ApiFailure> {
    let input = TaskInput::VibeMatch(VibeQuery {
        vibe_query: params.vibe_query.clone(),
        destination_type: params
            .destination_type
            .as_deref()
            .and_then(|v| v.parse::<DestinationType>().ok()),
        budget: params
            .budget
            .as_deref()
            .and_then(|v| v.parse::<BudgetRange>().ok()),
    });

    let outcome = state.agent.run(&input).await;

    let record =
        VibeDestination::from_result(params.vibe_query.clone(), &outcome.result, outcome.provenance);
    let doc = to_doc(&record)?;
    state
        .store
        .insert(Collection::VibeDestinations, record.id, &doc)
        .await?;

    Ok(Json(json!({
        "success": true,
        "vibe_query": params.vibe_query,
        "results": outcome.result,
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Itinerary generation
// ============================================================================

pub async fn smart_itinerary(
    State(state): State<AppState>,
    Json(preferences): Json<TravelPreferences>,
) -> Result<Json<Value>, ApiFailure> {
    validate_duration(preferences.duration).map_err(ApiFailure::from)?;

    let input = TaskInput::Itinerary(preferences.clone());
    let outcome = state.agent.run(&input).await;

    let record =
        TravelRecommendation::from_result(preferences.clone(), &outcome.result, outcome.provenance);
    let doc = to_doc(&record)?;
    state
        .store
        .insert(Collection::TravelRecommendations, record.id, &doc)
        .await?;

    info!(
        duration = preferences.duration,
        provenance = ?outcome.provenance,
        "itinerary generated"
    );

    Ok(Json(json!({
        "success": true,
        "preferences": preferences,
        "itinerary": outcome.result,
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Destination suggestions
// ============================================================================

#[derive(Deserialize)]
pub struct DestinationSuggestionParams {
    pub destination_type: String,
    pub budget_range: String,
    pub travel_style: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default = "default_month")]
    pub travel_month: String,
}

fn default_month() -> String {
    "any month".to_string()
}

pub async fn destination_suggestions(
    State(state): State<AppState>,
    Query(params): Query<DestinationSuggestionParams>,
) -> Result<Json<Value>, ApiFailure> {
    let input = TaskInput::DestinationSuggestions(DestinationQuery {
        destination_type: parse_field::<DestinationType>(&params.destination_type)?,
        budget_range: parse_field::<BudgetRange>(&params.budget_range)?,
        travel_style: parse_field::<TravelStyle>(&params.travel_style)?,
        vibe: params.vibe,
        travel_month: params.travel_month,
    });

    let outcome = state.agent.run(&input).await;

    Ok(Json(json!({
        "success": true,
        "destinations": outcome.result.get("destinations").cloned().unwrap_or_else(|| json!([])),
        "reasoning": outcome.result.get("reasoning").cloned().unwrap_or_default(),
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Activity suggestions
// ============================================================================

#[derive(Deserialize)]
pub struct ActivitySuggestionParams {
    pub destination: String,
    pub travel_style: String,
    pub budget_range: Option<String>,
    #[serde(default = "default_month")]
    pub travel_month: String,
    pub duration: Option<u32>,
}

pub async fn activity_suggestions(
    State(state): State<AppState>,
    Query(params): Query<ActivitySuggestionParams>,
) -> Result<Json<Value>, ApiFailure> {
    let input = TaskInput::ActivitySuggestions(ActivityQuery {
        destination: params.destination,
        travel_style: parse_field::<TravelStyle>(&params.travel_style)?,
        budget_range: params
            .budget_range
            .as_deref()
            .and_then(|v| v.parse::<BudgetRange>().ok())
            .unwrap_or(BudgetRange::MidRange),
        travel_month: params.travel_month,
        duration: params.duration.unwrap_or(5),
    });

    let outcome = state.agent.run(&input).await;

    Ok(Json(json!({
        "success": true,
        "activities": outcome.result,
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Duration recommendation
// ============================================================================

#[derive(Deserialize)]
pub struct DurationRecommendationParams {
    pub destination: String,
    pub travel_style: Option<String>,
    pub traveler_count: Option<u32>,
}

pub async fn duration_recommendation(
    State(state): State<AppState>,
    Query(params): Query<DurationRecommendationParams>,
) -> Result<Json<Value>, ApiFailure> {
    let input = TaskInput::DurationRecommendation(DurationQuery {
        destination: params.destination,
        travel_style: params
            .travel_style
            .as_deref()
            .and_then(|v| v.parse::<TravelStyle>().ok())
            .unwrap_or(TravelStyle::Relaxed),
        traveler_count: params.traveler_count.unwrap_or(1),
    });

    let outcome = state.agent.run(&input).await;

    Ok(Json(json!({
        "success": true,
        "recommendation": outcome.result,
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Review analysis
// ============================================================================

#[derive(Deserialize)]
pub struct ReviewParams {
    pub review_text: String,
}

pub async fn analyze_review(
    State(state): State<AppState>,
    Query(params): Query<ReviewParams>,
) -> Result<Json<Value>, ApiFailure> {
    validate_review_text(&params.review_text).map_err(ApiFailure::from)?;

    let input = TaskInput::ReviewSentiment(ReviewRequest {
        review_text: params.review_text.clone(),
    });
    let outcome = state.agent.run(&input).await;

    let record = ReviewAnalysis::from_result(
        params.review_text.clone(),
        &outcome.result,
        outcome.provenance,
    );
    let doc = to_doc(&record)?;
    state
        .store
        .insert(Collection::ReviewAnalyses, record.id, &doc)
        .await?;

    Ok(Json(json!({
        "success": true,
        "review_text": params.review_text,
        "analysis": outcome.result,
        "provenance": outcome.provenance,
    })))
}

// ============================================================================
// Destination reviews
// ============================================================================

#[derive(Deserialize)]
pub struct DestinationReviewParams {
    pub destination: String,
    #[allow(dead_code)]
    pub review_type: Option<String>,
}

pub async fn destination_reviews(
    State(state): State<AppState>,
    Query(params): Query<DestinationReviewParams>,
) -> Result<Json<Value>, ApiFailure> {
    let reviews = state.store.reviews_mentioning(&params.destination, 20).await?;

    let safety: Vec<f64> = scores_of(&reviews, "safety_score");
    let cleanliness: Vec<f64> = scores_of(&reviews, "cleanliness_score");

    Ok(Json(json!({
        "success": true,
        "destination": params.destination,
        "review_count": reviews.len(),
        "reviews": reviews,
        "average_safety_score": round2(mean(&safety)),
        "average_cleanliness_score": round2(mean(&cleanliness)),
    })))
}

// ============================================================================
// Travel insights
// ============================================================================

pub async fn travel_insights(State(state): State<AppState>) -> Result<Json<Value>, ApiFailure> {
    let recent_reviews = state.store.recent(Collection::ReviewAnalyses, 10).await?;
    let recent_recommendations = state
        .store
        .recent(Collection::TravelRecommendations, 5)
        .await?;
    let recent_vibes = state.store.recent(Collection::VibeDestinations, 5).await?;

    let safety = scores_of(&recent_reviews, "safety_score");
    let cleanliness = scores_of(&recent_reviews, "cleanliness_score");

    let mut sentiment_distribution = serde_json::Map::new();
    for review in &recent_reviews {
        let sentiment = review
            .get("overall_sentiment")
            .and_then(Value::as_str)
            .unwrap_or("neutral");
        let count = sentiment_distribution
            .get(sentiment)
            .and_then(Value::as_u64)
            .unwrap_or(0);
        sentiment_distribution.insert(sentiment.to_string(), json!(count + 1));
    }

    let popular_vibes: Vec<String> = recent_vibes
        .iter()
        .take(3)
        .filter_map(|vibe| vibe.get("vibe_query").and_then(Value::as_str))
        .map(String::from)
        .collect();

    Ok(Json(json!({
        "success": true,
        "insights": {
            "total_reviews_analyzed": recent_reviews.len(),
            "average_safety_score": round2(mean(&safety)),
            "average_cleanliness_score": round2(mean(&cleanliness)),
            "sentiment_distribution": Value::Object(sentiment_distribution),
            "recent_recommendations": recent_recommendations.len(),
            "popular_vibes": popular_vibes,
        }
    })))
}

// ============================================================================
// Static lookups
// ============================================================================

#[derive(Deserialize)]
pub struct ConvertCurrencyParams {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

pub async fn convert_currency(
    Query(params): Query<ConvertCurrencyParams>,
) -> Result<Json<Value>, ApiFailure> {
    let conversion = lookup::convert(params.amount, &params.from_currency, &params.to_currency)
        .ok_or_else(|| ApiFailure::bad_request("Unknown currency code"))?;

    Ok(Json(json!({
        "success": true,
        "original_amount": conversion.original_amount,
        "from_currency": conversion.from_currency,
        "converted_amount": conversion.converted_amount,
        "to_currency": conversion.to_currency,
        "exchange_rate": conversion.exchange_rate,
    })))
}

#[derive(Deserialize)]
pub struct DestinationCurrencyParams {
    pub destination: String,
}

pub async fn destination_currency(
    Query(params): Query<DestinationCurrencyParams>,
) -> Json<Value> {
    let info = lookup::currency_for(&params.destination);
    Json(json!({
        "success": true,
        "destination": params.destination,
        "currency": info.code,
        "symbol": info.symbol,
    }))
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_field<T: std::str::FromStr<Err = String>>(raw: &str) -> Result<T, ApiFailure> {
    raw.parse::<T>()
        .map_err(|message| ApiFailure::from(ApiError::Validation(message)))
}

fn to_doc<T: serde::Serialize>(record: &T) -> Result<Value, ApiFailure> {
    serde_json::to_value(record)
        .map_err(|e| ApiFailure::internal(format!("record serialization failed: {}", e)))
}

fn scores_of(docs: &[Value], key: &str) -> Vec<f64> {
    docs.iter()
        .filter_map(|doc| doc.get(key).and_then(Value::as_f64))
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
