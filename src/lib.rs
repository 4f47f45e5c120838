//! WanderWise platform library
//!
//! Persistence, account/session handling, static lookup tables and the
//! record models the HTTP layer stores. The LLM normalization pipeline
//! lives in the `wander-agentic` crate; this crate owns everything that
//! touches the database.

pub mod auth;
pub mod database;
pub mod error;
pub mod lookup;
pub mod models;

pub use database::{Collection, DocumentStore, ItineraryRepository, UserRepository};
pub use error::ApiError;
pub use models::{ReviewAnalysis, TravelRecommendation, VibeDestination};
