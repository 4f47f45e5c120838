//! Backend Selection
//!
//! Enum for selecting between LLM providers, plus the per-role model
//! assignments each provider uses for the travel tasks.

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Advisory roles the platform prompts a model in
///
/// Each role maps to a different default model: destination advice favors
/// a general model, itinerary planning the strongest one, and review
/// sentiment a cheap small one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    /// Vibe matching, destination/activity suggestions, duration advice
    Advisor,
    /// Itinerary generation
    Planner,
    /// Review sentiment analysis
    Sentiment,
}

/// LLM backend provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentBackend {
    /// Anthropic Claude (default)
    #[default]
    Anthropic,
    /// OpenAI GPT
    OpenAi,
}

impl AgentBackend {
    /// Create from AGENT_BACKEND environment variable
    ///
    /// Valid values: "anthropic", "claude", "openai", "gpt"
    /// Defaults to Anthropic if not set
    pub fn from_env() -> Result<Self> {
        let value = std::env::var("AGENT_BACKEND").unwrap_or_else(|_| "anthropic".to_string());
        value.parse().map_err(|e: ParseBackendError| anyhow!("{}", e))
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            AgentBackend::Anthropic => "Anthropic",
            AgentBackend::OpenAi => "OpenAI",
        }
    }

    /// Default model identifier for a given advisory role
    pub fn default_model(&self, role: ModelRole) -> &'static str {
        match (self, role) {
            (AgentBackend::Anthropic, ModelRole::Advisor) => "claude-3-7-sonnet-20250219",
            (AgentBackend::Anthropic, ModelRole::Planner) => "claude-3-7-sonnet-20250219",
            (AgentBackend::Anthropic, ModelRole::Sentiment) => "claude-3-5-haiku-20241022",
            (AgentBackend::OpenAi, ModelRole::Advisor) => "gpt-4o",
            (AgentBackend::OpenAi, ModelRole::Planner) => "gpt-4o",
            (AgentBackend::OpenAi, ModelRole::Sentiment) => "gpt-4o-mini",
        }
    }
}

/// Error type for parsing AgentBackend
#[derive(Debug)]
pub struct ParseBackendError(String);

impl std::fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for AgentBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(AgentBackend::Anthropic),
            "openai" | "gpt" => Ok(AgentBackend::OpenAi),
            other => Err(ParseBackendError(format!(
                "Unknown AGENT_BACKEND '{}'. Valid values: anthropic, claude, openai, gpt",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AgentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "claude".parse::<AgentBackend>().unwrap(),
            AgentBackend::Anthropic
        );
        assert_eq!("GPT".parse::<AgentBackend>().unwrap(), AgentBackend::OpenAi);
        assert!("mistral".parse::<AgentBackend>().is_err());
    }

    #[test]
    fn test_default_is_anthropic() {
        assert_eq!(AgentBackend::default(), AgentBackend::Anthropic);
    }

    #[test]
    fn test_sentiment_role_uses_small_model() {
        assert_eq!(
            AgentBackend::OpenAi.default_model(ModelRole::Sentiment),
            "gpt-4o-mini"
        );
        assert_eq!(
            AgentBackend::Anthropic.default_model(ModelRole::Sentiment),
            "claude-3-5-haiku-20241022"
        );
    }
}
