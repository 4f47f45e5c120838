//! Client Factory
//!
//! Builds the shared, stateless LLM clients once at startup. Orchestration
//! runs borrow them by `Arc`; nothing here is mutated after construction.

use std::sync::Arc;

use anyhow::Result;

use crate::anthropic_client::AnthropicClient;
use crate::backend::{AgentBackend, ModelRole};
use crate::llm_client::LlmClient;
use crate::openai_client::OpenAiClient;

/// One client per advisory role
///
/// The roles may share a provider (and even a model); they stay separate
/// handles so model overrides and logging stay per-role.
#[derive(Clone)]
pub struct ClientSet {
    pub advisor: Arc<dyn LlmClient>,
    pub planner: Arc<dyn LlmClient>,
    pub sentiment: Arc<dyn LlmClient>,
}

impl ClientSet {
    /// Build the full role set from environment variables
    pub fn from_env() -> Result<Self> {
        let backend = AgentBackend::from_env()?;
        Ok(Self {
            advisor: create_llm_client(backend, ModelRole::Advisor)?,
            planner: create_llm_client(backend, ModelRole::Planner)?,
            sentiment: create_llm_client(backend, ModelRole::Sentiment)?,
        })
    }

    /// Use one client for every role (handy for tests and stubs)
    pub fn uniform(client: Arc<dyn LlmClient>) -> Self {
        Self {
            advisor: client.clone(),
            planner: client.clone(),
            sentiment: client,
        }
    }
}

/// Create a client for the given backend and role, keyed from the environment
pub fn create_llm_client(backend: AgentBackend, role: ModelRole) -> Result<Arc<dyn LlmClient>> {
    let model = backend.default_model(role);
    let client: Arc<dyn LlmClient> = match backend {
        AgentBackend::Anthropic => Arc::new(AnthropicClient::from_env(model)?),
        AgentBackend::OpenAi => Arc::new(OpenAiClient::from_env(model)?),
    };
    tracing::info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "initialized LLM client"
    );
    Ok(client)
}
