//! Guarded Invocation
//!
//! Wraps a chat completion call in an optional time budget. On expiry the
//! in-flight future is dropped, so a late reply from the abandoned call can
//! never reach the response path - the orchestrator has already moved on to
//! fallback synthesis. Client faults are converted to typed failures and
//! never propagate out of the pipeline.

use std::time::Duration;

use thiserror::Error;

use crate::llm_client::LlmClient;

/// Failure of a guarded model call
#[derive(Debug, Error)]
pub enum LlmFailure {
    #[error("model call exceeded its {budget:?} budget")]
    Timeout { budget: Duration },

    #[error("model call failed: {0}")]
    Client(String),
}

/// Run one chat completion under an optional time budget
///
/// `budget: None` means the call may take as long as the client allows;
/// short lookup tasks run unbounded, itinerary generation gets 20-25s.
pub async fn invoke(
    client: &dyn LlmClient,
    system_prompt: &str,
    user_prompt: &str,
    budget: Option<Duration>,
) -> Result<String, LlmFailure> {
    match budget {
        Some(limit) => {
            match tokio::time::timeout(limit, client.chat(system_prompt, user_prompt)).await {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(err)) => Err(LlmFailure::Client(err.to_string())),
                Err(_) => Err(LlmFailure::Timeout { budget: limit }),
            }
        }
        None => client
            .chat(system_prompt, user_prompt)
            .await
            .map_err(|err| LlmFailure::Client(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct SlowClient {
        delay: Duration,
    }

    #[async_trait]
    impl LlmClient for SlowClient {
        async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            tokio::time::sleep(self.delay).await;
            Ok("late".to_string())
        }

        async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
            self.chat(system, user).await
        }

        fn model_name(&self) -> &str {
            "slow-stub"
        }

        fn provider_name(&self) -> &str {
            "Stub"
        }
    }

    struct FaultyClient;

    #[async_trait]
    impl LlmClient for FaultyClient {
        async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            Err(anyhow!("rate limited"))
        }

        async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
            self.chat(system, user).await
        }

        fn model_name(&self) -> &str {
            "faulty-stub"
        }

        fn provider_name(&self) -> &str {
            "Stub"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_times_out() {
        let client = SlowClient {
            delay: Duration::from_secs(60),
        };
        let result = invoke(&client, "sys", "user", Some(Duration::from_secs(20))).await;
        assert!(matches!(result, Err(LlmFailure::Timeout { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_beats_budget() {
        let client = SlowClient {
            delay: Duration::from_secs(1),
        };
        let result = invoke(&client, "sys", "user", Some(Duration::from_secs(20))).await;
        assert_eq!(result.unwrap(), "late");
    }

    #[tokio::test]
    async fn test_client_fault_is_converted() {
        let result = invoke(&FaultyClient, "sys", "user", None).await;
        match result {
            Err(LlmFailure::Client(msg)) => assert!(msg.contains("rate limited")),
            other => panic!("expected client failure, got {:?}", other),
        }
    }
}
