//! Agent Orchestrator
//!
//! Main entry point for the advisory tasks. Drives one request through
//! prompt building, the guarded model call, JSON extraction, and - when
//! any of that fails - fallback synthesis. Single pass, no retry: the
//! caller always gets a schema-valid result, flagged with where it came
//! from, and never an error originating in the model call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client_factory::ClientSet;
use crate::extract::extract_json;
use crate::fallback::{synthesize, FallbackCause};
use crate::invoker::{invoke, LlmFailure};
use crate::llm_client::LlmClient;
use crate::task::{TaskInput, TaskKind};

/// Where a task result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Extracted from the model's reply
    Model,
    /// Deterministically synthesized after a model-path failure
    Fallback,
}

/// Final result of one orchestration run
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutcome {
    pub result: serde_json::Value,
    pub provenance: Provenance,
}

/// Per-task orchestration over a shared set of role clients
///
/// Holds no mutable state; concurrent runs only share the immutable
/// clients behind `Arc`.
pub struct AgentOrchestrator {
    clients: ClientSet,
}

impl AgentOrchestrator {
    pub fn new(clients: ClientSet) -> Self {
        Self { clients }
    }

    /// Build from environment variables (backend selection + API keys)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ClientSet::from_env()?))
    }

    /// Use one client for every role (tests, single-provider deployments)
    pub fn with_client(client: Arc<dyn LlmClient>) -> Self {
        Self::new(ClientSet::uniform(client))
    }

    fn client_for(&self, kind: TaskKind) -> &dyn LlmClient {
        match kind {
            TaskKind::Itinerary | TaskKind::DestinationItinerary => self.clients.planner.as_ref(),
            TaskKind::ReviewSentiment => self.clients.sentiment.as_ref(),
            _ => self.clients.advisor.as_ref(),
        }
    }

    /// Run one task end to end
    ///
    /// Model-path faults are absorbed here; the returned outcome is always
    /// well-formed for the task's shape.
    pub async fn run(&self, input: &TaskInput) -> TaskOutcome {
        let kind = input.kind();
        let client = self.client_for(kind);
        let user_prompt = input.user_prompt();

        let cause = match invoke(client, kind.system_role(), &user_prompt, kind.budget()).await {
            Ok(raw_text) => match self.accept(kind, &raw_text) {
                Ok(result) => {
                    debug!(task = kind.name(), model = client.model_name(), "model result accepted");
                    return TaskOutcome {
                        result,
                        provenance: Provenance::Model,
                    };
                }
                Err(reason) => {
                    warn!(task = kind.name(), %reason, "extraction failed, synthesizing fallback");
                    FallbackCause::Extraction
                }
            },
            Err(LlmFailure::Timeout { budget }) => {
                warn!(task = kind.name(), ?budget, "model call timed out, synthesizing fallback");
                FallbackCause::Timeout
            }
            Err(LlmFailure::Client(message)) => {
                warn!(task = kind.name(), %message, "model call failed, synthesizing fallback");
                FallbackCause::Client
            }
        };

        TaskOutcome {
            result: synthesize(input, cause),
            provenance: Provenance::Fallback,
        }
    }

    /// Extract and shape-check a raw reply for this task
    fn accept(&self, kind: TaskKind, raw_text: &str) -> Result<serde_json::Value, String> {
        let value = extract_json(raw_text, kind.shape()).map_err(|e| e.to_string())?;
        for key in kind.required_keys() {
            if value.get(key).is_none() {
                return Err(format!("payload missing required key '{}'", key));
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{BudgetRange, DestinationType, TravelPreferences, TravelStyle};
    use crate::task::ReviewRequest;
    use async_trait::async_trait;

    struct CannedClient {
        reply: String,
    }

    #[async_trait]
    impl LlmClient for CannedClient {
        async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            Ok(self.reply.clone())
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

    fn orchestrator_with_reply(reply: &str) -> AgentOrchestrator {
        AgentOrchestrator::with_client(Arc::new(CannedClient {
            reply: reply.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_payload_missing_required_keys_falls_back() {
        let orchestrator = orchestrator_with_reply("{\"unexpected\": true}");
        let input = TaskInput::Itinerary(TravelPreferences {
            destination_type: DestinationType::City,
            budget_range: BudgetRange::MidRange,
            travel_style: TravelStyle::Cultural,
            duration: 2,
            activities: vec![],
            vibe: "lively".to_string(),
            destination: None,
        });
        let outcome = orchestrator.run(&input).await;
        assert_eq!(outcome.provenance, Provenance::Fallback);
        assert!(outcome.result.get("daily_itinerary").is_some());
    }

    #[tokio::test]
    async fn test_valid_payload_passes_through() {
        let reply = "Here you go: {\"overall_sentiment\":\"positive\",\"safety_score\":9,\
                     \"cleanliness_score\":8,\"sentiment_confidence\":0.9}";
        let orchestrator = orchestrator_with_reply(reply);
        let input = TaskInput::ReviewSentiment(ReviewRequest {
            review_text: "Great hotel, very clean and safe".to_string(),
        });
        let outcome = orchestrator.run(&input).await;
        assert_eq!(outcome.provenance, Provenance::Model);
        assert_eq!(outcome.result["overall_sentiment"], "positive");
    }
}
