//! End-to-end orchestration scenarios with stub model clients.
//!
//! Each scenario drives the full pipeline: prompt → guarded invoke →
//! extract → fallback, asserting on the outcome the HTTP layer would see.

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;

use wander_agentic::task::{DurationQuery, ReviewRequest, TaskInput};
use wander_agentic::{
    AgentOrchestrator, BudgetRange, DestinationType, LlmClient, Provenance, TravelPreferences,
    TravelStyle,
};

/// Stub that never answers within any budget
struct HangingClient;

#[async_trait]
impl LlmClient for HangingClient {
    async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("too late".to_string())
    }

    async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
        self.chat(system, user).await
    }

    fn model_name(&self) -> &str {
        "hanging-stub"
    }

    fn provider_name(&self) -> &str {
        "Stub"
    }
}

/// Stub that fails immediately, like a transport or rate-limit fault
struct BrokenClient;

#[async_trait]
impl LlmClient for BrokenClient {
    async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        Err(anyhow!("connection reset by peer"))
    }

    async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
        self.chat(system, user).await
    }

    fn model_name(&self) -> &str {
        "broken-stub"
    }

    fn provider_name(&self) -> &str {
        "Stub"
    }
}

/// Stub that returns a fixed reply
struct CannedClient(String);

#[async_trait]
impl LlmClient for CannedClient {
    async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }

    async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
        self.chat(system, user).await
    }

    fn model_name(&self) -> &str {
        "canned-stub"
    }

    fn provider_name(&self) -> &str {
        "Stub"
    }
}

fn beach_budget_prefs() -> TravelPreferences {
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

#[tokio::test(start_paused = true)]
async fn itinerary_timeout_yields_fallback_with_table_costs() {
    let orchestrator = AgentOrchestrator::with_client(Arc::new(HangingClient));
    let input = TaskInput::Itinerary(beach_budget_prefs());

    let outcome = orchestrator.run(&input).await;

    assert_eq!(outcome.provenance, Provenance::Fallback);
    assert_eq!(outcome.result["estimated_costs"]["accommodation"], "$80/night");
    let days = outcome.result["daily_itinerary"].as_object().unwrap();
    assert_eq!(days.len(), 3);
    assert!(days.contains_key("day_1") && days.contains_key("day_3"));
}

#[tokio::test]
async fn review_reply_with_prose_wrapper_is_extracted_verbatim() {
    let reply = "Sure! {\"overall_sentiment\":\"positive\",\"safety_score\":9,\
                 \"cleanliness_score\":8,\"sentiment_confidence\":0.9,\"key_insights\":[\"clean\"]}";
    let orchestrator = AgentOrchestrator::with_client(Arc::new(CannedClient(reply.to_string())));
    let input = TaskInput::ReviewSentiment(ReviewRequest {
        review_text: "The hotel was spotless and the area felt safe at night".to_string(),
    });

    let outcome = orchestrator.run(&input).await;

    assert_eq!(outcome.provenance, Provenance::Model);
    assert_eq!(
        outcome.result,
        serde_json::json!({
            "overall_sentiment": "positive",
            "safety_score": 9,
            "cleanliness_score": 8,
            "sentiment_confidence": 0.9,
            "key_insights": ["clean"]
        })
    );
}

#[tokio::test]
async fn mountain_duration_advice_without_model_uses_static_table() {
    let orchestrator = AgentOrchestrator::with_client(Arc::new(BrokenClient));
    let input = TaskInput::DurationRecommendation(DurationQuery {
        destination: "Rocky Mountains".to_string(),
        travel_style: TravelStyle::Adventure,
        traveler_count: 2,
    });

    let outcome = orchestrator.run(&input).await;

    assert_eq!(outcome.provenance, Provenance::Fallback);
    assert_eq!(outcome.result["minimum"], 5);
    assert_eq!(outcome.result["ideal"], 8);
    assert_eq!(outcome.result["maximum"], 21);
}

#[tokio::test]
async fn garbage_reply_falls_back_but_stays_schema_valid() {
    let orchestrator =
        AgentOrchestrator::with_client(Arc::new(CannedClient("I cannot help with that.".into())));
    let input = TaskInput::Itinerary(beach_budget_prefs());

    let outcome = orchestrator.run(&input).await;

    assert_eq!(outcome.provenance, Provenance::Fallback);
    for key in ["destination_recommendations", "daily_itinerary", "estimated_costs", "local_tips"] {
        assert!(outcome.result.get(key).is_some(), "missing {}", key);
    }
}

#[tokio::test]
async fn fallback_runs_are_idempotent() {
    let orchestrator = AgentOrchestrator::with_client(Arc::new(BrokenClient));
    let input = TaskInput::Itinerary(beach_budget_prefs());

    let first = orchestrator.run(&input).await;
    let second = orchestrator.run(&input).await;

    assert_eq!(
        serde_json::to_vec(&first.result).unwrap(),
        serde_json::to_vec(&second.result).unwrap()
    );
}

#[tokio::test(start_paused = true)]
async fn unbounded_tasks_wait_out_slow_clients() {
    // Review sentiment has no budget, so even a slow reply is used.
    struct SlowCanned(String);

    #[async_trait]
    impl LlmClient for SlowCanned {
        async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(90)).await;
            Ok(self.0.clone())
        }

        async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
            self.chat(system, user).await
        }

        fn model_name(&self) -> &str {
            "slow-canned-stub"
        }

        fn provider_name(&self) -> &str {
            "Stub"
        }
    }

    let reply = "{\"overall_sentiment\":\"negative\",\"safety_score\":2,\
                 \"cleanliness_score\":3,\"sentiment_confidence\":0.8}";
    let orchestrator = AgentOrchestrator::with_client(Arc::new(SlowCanned(reply.to_string())));
    let input = TaskInput::ReviewSentiment(ReviewRequest {
        review_text: "Dirty rooms and we did not feel safe after dark".to_string(),
    });

    let outcome = orchestrator.run(&input).await;

    assert_eq!(outcome.provenance, Provenance::Model);
    assert_eq!(outcome.result["overall_sentiment"], "negative");
}
