//! LLM-powered travel advisory core
//!
//! This crate turns travel-preference requests into structured results by
//! prompting a hosted chat model, extracting the JSON payload embedded in
//! its freeform reply, and deterministically synthesizing a schema-compliant
//! substitute when the call times out, fails, or returns unparseable text.
//! It has no database dependencies - persistence stays in the main crate.
//!
//! ## Pipeline
//!
//! ```text
//! TaskInput → prompt → guarded invoke → extract JSON → TaskOutcome
//!                          │                 │
//!                          └── timeout/fault ┴── fallback synthesis
//! ```
//!
//! ## Backend Selection
//!
//! Set `AGENT_BACKEND` environment variable:
//! - `anthropic` (default): Anthropic Claude API
//! - `openai`: OpenAI API

// LLM client abstraction
pub mod anthropic_client;
pub mod backend;
pub mod client_factory;
pub mod llm_client;
pub mod openai_client;

// Normalization pipeline
pub mod extract;
pub mod fallback;
pub mod invoker;
pub mod orchestrator;
pub mod preferences;
pub mod task;

// Re-exports for convenience
pub use backend::AgentBackend;
pub use client_factory::{create_llm_client, ClientSet};
pub use extract::{extract_json, ExtractionError, JsonShape};
pub use fallback::FallbackCause;
pub use invoker::LlmFailure;
pub use llm_client::LlmClient;
pub use orchestrator::{AgentOrchestrator, Provenance, TaskOutcome};
pub use preferences::{BudgetRange, DestinationType, TravelPreferences, TravelStyle};
pub use task::{TaskInput, TaskKind};
