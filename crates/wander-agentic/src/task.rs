//! Task Descriptors
//!
//! One descriptor per advisory task kind: which system role speaks, what
//! shape the payload must have, which keys make an extracted payload
//! acceptable, and how long the model call may run. The prompt builders
//! live here too, so every endpoint drives the same orchestrator instead
//! of carrying its own copy of the pipeline.

use std::time::Duration;

use crate::extract::JsonShape;
use crate::preferences::{BudgetRange, DestinationType, TravelPreferences, TravelStyle};

/// System prompt for destination/vibe/activity advice
pub const ADVISOR_ROLE: &str = "You are WanderWise AI, an expert travel advisor specializing in \
     personalized travel recommendations based on user preferences and vibes.";

/// System prompt for itinerary planning
pub const PLANNER_ROLE: &str = "You are a sophisticated travel expert who creates detailed, \
     personalized itineraries and provides comprehensive travel insights.";

/// System prompt for review analysis
pub const SENTIMENT_ROLE: &str = "You are a sentiment analysis expert specializing in travel \
     reviews. Analyze sentiment, safety, and cleanliness insights from travel reviews.";

/// Vibe-based destination matching input
#[derive(Debug, Clone)]
pub struct VibeQuery {
    pub vibe_query: String,
    pub destination_type: Option<DestinationType>,
    pub budget: Option<BudgetRange>,
}

/// Destination suggestion input
#[derive(Debug, Clone)]
pub struct DestinationQuery {
    pub destination_type: DestinationType,
    pub budget_range: BudgetRange,
    pub travel_style: TravelStyle,
    pub vibe: String,
    pub travel_month: String,
}

/// Seasonal activity suggestion input
#[derive(Debug, Clone)]
pub struct ActivityQuery {
    pub destination: String,
    pub travel_style: TravelStyle,
    pub budget_range: BudgetRange,
    pub travel_month: String,
    pub duration: u32,
}

/// Trip length advice input
#[derive(Debug, Clone)]
pub struct DurationQuery {
    pub destination: String,
    pub travel_style: TravelStyle,
    pub traveler_count: u32,
}

/// Review sentiment input; length validation happens at the HTTP boundary
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub review_text: String,
}

/// Input for one orchestration run
#[derive(Debug, Clone)]
pub enum TaskInput {
    VibeMatch(VibeQuery),
    Itinerary(TravelPreferences),
    DestinationSuggestions(DestinationQuery),
    ActivitySuggestions(ActivityQuery),
    DurationRecommendation(DurationQuery),
    ReviewSentiment(ReviewRequest),
}

/// The task kinds the orchestrator knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    VibeMatch,
    Itinerary,
    /// Itinerary for an already-chosen destination; larger budget
    DestinationItinerary,
    DestinationSuggestions,
    ActivitySuggestions,
    DurationRecommendation,
    ReviewSentiment,
}

impl TaskInput {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskInput::VibeMatch(_) => TaskKind::VibeMatch,
            TaskInput::Itinerary(prefs) if prefs.destination.is_some() => {
                TaskKind::DestinationItinerary
            }
            TaskInput::Itinerary(_) => TaskKind::Itinerary,
            TaskInput::DestinationSuggestions(_) => TaskKind::DestinationSuggestions,
            TaskInput::ActivitySuggestions(_) => TaskKind::ActivitySuggestions,
            TaskInput::DurationRecommendation(_) => TaskKind::DurationRecommendation,
            TaskInput::ReviewSentiment(_) => TaskKind::ReviewSentiment,
        }
    }

    /// Build the user message sent to the model
    pub fn user_prompt(&self) -> String {
        match self {
            TaskInput::VibeMatch(query) => {
                let preferences = serde_json::json!({
                    "destination_type": query
                        .destination_type
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "any".to_string()),
                    "budget": query
                        .budget
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| "mid-range".to_string()),
                });
                format!(
                    "Analyze this travel vibe: \"{}\"\nUser preferences: {}\n\n\
                     Provide a JSON response with:\n\
                     1. matched_destinations: List of 5 destinations that match this vibe\n\
                     2. vibe_score: How well you can match this vibe (0-1)\n\
                     3. reasoning: Why these destinations match the vibe\n\n\
                     Each destination should have: name, country, description, why_it_matches, image_keywords",
                    query.vibe_query, preferences
                )
            }
            TaskInput::Itinerary(prefs) => {
                let place = prefs
                    .destination
                    .as_deref()
                    .map(|d| format!(" in {}", d))
                    .unwrap_or_default();
                format!(
                    "Create a {}-day {} itinerary{}. Budget: {}, Style: {}.\n\n\
                     Return JSON with:\n\
                     {{\n\
                       \"destination_recommendations\": [\n\
                         {{\"name\": \"Destination Name\", \"description\": \"Brief description\", \"highlights\": [\"key attraction 1\", \"key attraction 2\"]}}\n\
                       ],\n\
                       \"daily_itinerary\": {{\n\
                         \"day_1\": {{\"morning\": \"Activity\", \"afternoon\": \"Activity\", \"evening\": \"Activity\"}}\n\
                       }},\n\
                       \"estimated_costs\": {{\n\
                         \"accommodation\": \"$X-Y per night\",\n\
                         \"meals\": \"$X-Y per day\",\n\
                         \"activities\": \"$X-Y per day\"\n\
                       }},\n\
                       \"local_tips\": [\"tip 1\", \"tip 2\"]\n\
                     }}\n\n\
                     Keep it concise but helpful for {} travelers.",
                    prefs.duration, prefs.destination_type, place, prefs.budget_range,
                    prefs.travel_style, prefs.vibe
                )
            }
            TaskInput::DestinationSuggestions(query) => format!(
                "Suggest destinations for a {} {} trip in {}. Budget: {}. Desired vibe: \"{}\"\n\n\
                 Provide a JSON response with:\n\
                 1. destinations: List of 5 destinations, each with name, country, description, best_for, estimated_daily_cost\n\
                 2. reasoning: Why these destinations fit",
                query.travel_style, query.destination_type, query.travel_month,
                query.budget_range, query.vibe
            ),
            TaskInput::ActivitySuggestions(query) => format!(
                "Suggest activities in {} for a {}-day {} trip in {}. Budget: {}.\n\n\
                 Provide a JSON response with:\n\
                 1. seasonal_activities: List of activities specific to {} there\n\
                 2. year_round_activities: List of activities good in any month\n\n\
                 Each activity should have: name, description, estimated_cost",
                query.destination, query.duration, query.travel_style, query.travel_month,
                query.budget_range, query.travel_month
            ),
            TaskInput::DurationRecommendation(query) => format!(
                "How many days should a {} trip to {} for {} traveler(s) last?\n\n\
                 Provide a JSON response with exactly these keys:\n\
                 1. minimum: fewest days that make the trip worthwhile\n\
                 2. ideal: recommended number of days\n\
                 3. maximum: most days before diminishing returns",
                query.travel_style, query.destination, query.traveler_count
            ),
            TaskInput::ReviewSentiment(request) => format!(
                "Analyze this travel review for sentiment, safety, and cleanliness insights:\n\n\
                 Review: \"{}\"\n\n\
                 Provide JSON response with:\n\
                 1. overall_sentiment: \"positive\", \"negative\", or \"neutral\"\n\
                 2. sentiment_confidence: 0-1 confidence score\n\
                 3. safety_score: 0-10 (how safe the place seems)\n\
                 4. cleanliness_score: 0-10 (how clean the place seems)\n\
                 5. key_insights: List of important points mentioned\n\
                 6. safety_mentions: Specific safety-related comments\n\
                 7. cleanliness_mentions: Specific cleanliness-related comments\n\
                 8. recommendation: Overall recommendation based on analysis",
                request.review_text
            ),
        }
    }
}

impl TaskKind {
    /// Stable name used in logs and persisted provenance
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::VibeMatch => "vibe_match",
            TaskKind::Itinerary => "itinerary",
            TaskKind::DestinationItinerary => "destination_itinerary",
            TaskKind::DestinationSuggestions => "destination_suggestions",
            TaskKind::ActivitySuggestions => "activity_suggestions",
            TaskKind::DurationRecommendation => "duration_recommendation",
            TaskKind::ReviewSentiment => "review_sentiment",
        }
    }

    /// Every travel task expects a JSON object payload
    pub fn shape(&self) -> JsonShape {
        JsonShape::Object
    }

    /// Time budget for the model call; None means unbounded
    pub fn budget(&self) -> Option<Duration> {
        match self {
            TaskKind::Itinerary => Some(Duration::from_secs(20)),
            TaskKind::DestinationItinerary => Some(Duration::from_secs(25)),
            _ => None,
        }
    }

    /// Keys an extracted payload must carry to count as a valid result
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            TaskKind::VibeMatch => &["matched_destinations"],
            TaskKind::Itinerary | TaskKind::DestinationItinerary => {
                &["daily_itinerary", "estimated_costs"]
            }
            TaskKind::DestinationSuggestions => &["destinations"],
            TaskKind::ActivitySuggestions => &["seasonal_activities"],
            TaskKind::DurationRecommendation => &["minimum", "ideal", "maximum"],
            TaskKind::ReviewSentiment => {
                &["overall_sentiment", "safety_score", "cleanliness_score"]
            }
        }
    }

    /// Which system role prompts this task
    pub fn system_role(&self) -> &'static str {
        match self {
            TaskKind::Itinerary | TaskKind::DestinationItinerary => PLANNER_ROLE,
            TaskKind::ReviewSentiment => SENTIMENT_ROLE,
            _ => ADVISOR_ROLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beach_prefs() -> TravelPreferences {
        TravelPreferences {
            destination_type: DestinationType::Beach,
            budget_range: BudgetRange::Budget,
            travel_style: TravelStyle::Relaxed,
            duration: 3,
            activities: vec![],
            vibe: "calm".to_string(),
            destination: None,
        }
    }

    #[test]
    fn test_itinerary_kind_depends_on_destination() {
        let open = TaskInput::Itinerary(beach_prefs());
        assert_eq!(open.kind(), TaskKind::Itinerary);

        let mut prefs = beach_prefs();
        prefs.destination = Some("Bali".to_string());
        let pinned = TaskInput::Itinerary(prefs);
        assert_eq!(pinned.kind(), TaskKind::DestinationItinerary);
    }

    #[test]
    fn test_budgets() {
        assert_eq!(TaskKind::Itinerary.budget(), Some(Duration::from_secs(20)));
        assert_eq!(
            TaskKind::DestinationItinerary.budget(),
            Some(Duration::from_secs(25))
        );
        assert_eq!(TaskKind::ReviewSentiment.budget(), None);
        assert_eq!(TaskKind::VibeMatch.budget(), None);
    }

    #[test]
    fn test_prompt_carries_preference_fields() {
        let prompt = TaskInput::Itinerary(beach_prefs()).user_prompt();
        assert!(prompt.contains("3-day beach itinerary"));
        assert!(prompt.contains("Budget: budget"));
        assert!(prompt.contains("Style: relaxed"));
        assert!(prompt.contains("calm travelers"));
    }

    #[test]
    fn test_vibe_prompt_defaults() {
        let prompt = TaskInput::VibeMatch(VibeQuery {
            vibe_query: "golden sunsets".to_string(),
            destination_type: None,
            budget: None,
        })
        .user_prompt();
        assert!(prompt.contains("golden sunsets"));
        assert!(prompt.contains("\"destination_type\":\"any\""));
    }

    #[test]
    fn test_review_prompt_embeds_text() {
        let prompt = TaskInput::ReviewSentiment(ReviewRequest {
            review_text: "Spotless rooms and friendly staff".to_string(),
        })
        .user_prompt();
        assert!(prompt.contains("Spotless rooms"));
        assert!(prompt.contains("overall_sentiment"));
    }
}
