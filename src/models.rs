//! Persisted record models
//!
//! Each record embeds the request parameters that produced it plus
//! provenance: an identifier, a creation timestamp, and whether the
//! payload came from the model or from fallback synthesis. Records are
//! created once and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use wander_agentic::{Provenance, TravelPreferences};

/// A stored itinerary generation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRecommendation {
    pub id: Uuid,
    pub user_preferences: TravelPreferences,
    pub destinations: Value,
    pub itinerary: Value,
    pub estimated_cost: Value,
    pub provenance: Provenance,
    pub created_at: DateTime<Utc>,
}

impl TravelRecommendation {
    /// Build a record from an orchestration result
    pub fn from_result(
        preferences: TravelPreferences,
        itinerary: &Value,
        provenance: Provenance,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_preferences: preferences,
            destinations: itinerary
                .get("destination_recommendations")
                .cloned()
                .unwrap_or_else(|| Value::Array(vec![])),
            estimated_cost: itinerary
                .get("estimated_costs")
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
            itinerary: itinerary.clone(),
            provenance,
            created_at: Utc::now(),
        }
    }
}

/// A stored review sentiment analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub id: Uuid,
    pub review_text: String,
    pub overall_sentiment: String,
    pub safety_score: f64,
    pub cleanliness_score: f64,
    pub sentiment_confidence: f64,
    pub key_insights: Vec<String>,
    pub provenance: Provenance,
    pub created_at: DateTime<Utc>,
}

impl ReviewAnalysis {
    /// Build a record from an orchestration result, defaulting any field
    /// the payload does not carry to neutral values
    pub fn from_result(review_text: String, analysis: &Value, provenance: Provenance) -> Self {
        Self {
            id: Uuid::new_v4(),
            review_text,
            overall_sentiment: analysis
                .get("overall_sentiment")
                .and_then(Value::as_str)
                .unwrap_or("neutral")
                .to_string(),
            safety_score: analysis
                .get("safety_score")
                .and_then(Value::as_f64)
                .unwrap_or(5.0),
            cleanliness_score: analysis
                .get("cleanliness_score")
                .and_then(Value::as_f64)
                .unwrap_or(5.0),
            sentiment_confidence: analysis
                .get("sentiment_confidence")
                .and_then(Value::as_f64)
                .unwrap_or(0.5),
            key_insights: analysis
                .get("key_insights")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            provenance,
            created_at: Utc::now(),
        }
    }
}

/// A stored vibe-to-destination match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeDestination {
    pub id: Uuid,
    pub vibe_query: String,
    pub matched_destinations: Value,
    pub vibe_score: f64,
    pub reasoning: String,
    pub provenance: Provenance,
    pub created_at: DateTime<Utc>,
}

impl VibeDestination {
    pub fn from_result(vibe_query: String, result: &Value, provenance: Provenance) -> Self {
        Self {
            id: Uuid::new_v4(),
            vibe_query,
            matched_destinations: result
                .get("matched_destinations")
                .cloned()
                .unwrap_or_else(|| Value::Array(vec![])),
            vibe_score: result.get("vibe_score").and_then(Value::as_f64).unwrap_or(0.5),
            reasoning: result
                .get("reasoning")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            provenance,
            created_at: Utc::now(),
        }
    }
}
