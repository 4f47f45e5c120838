//! LLM Client Trait
//!
//! Unified interface for chat completion providers (Anthropic, OpenAI).

use anyhow::Result;
use async_trait::async_trait;

/// Unified chat completion interface for both Anthropic and OpenAI
///
/// Implementations are stateless: an API key plus a model identifier,
/// safe to share across concurrent orchestration runs. There is no
/// per-request session affinity - every prompt is self-contained.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Call the model with system + user prompts, return the raw text reply
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Call the model expecting a JSON reply
    /// - For OpenAI: uses response_format json_object mode
    /// - For Anthropic: adds a JSON instruction to the system prompt
    async fn chat_json(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
