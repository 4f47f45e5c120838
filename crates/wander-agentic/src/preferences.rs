//! Travel preference types
//!
//! The request vocabulary shared by every advisory task: destination type,
//! budget tier, travel style, and the full preference set an itinerary
//! request carries. Values are immutable once constructed; one instance is
//! created per request and owned by the orchestration run that uses it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad category of destination the traveler is after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Beach,
    Mountain,
    City,
    Cultural,
    Adventure,
}

impl DestinationType {
    /// Guess a destination type from free text ("Swiss Alps" → Mountain)
    ///
    /// Unknown text maps to None; callers that need a row out of a
    /// per-type table treat that as City.
    pub fn infer(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        const HINTS: &[(&str, DestinationType)] = &[
            ("beach", DestinationType::Beach),
            ("island", DestinationType::Beach),
            ("coast", DestinationType::Beach),
            ("bali", DestinationType::Beach),
            ("maldives", DestinationType::Beach),
            ("mountain", DestinationType::Mountain),
            ("alps", DestinationType::Mountain),
            ("himalaya", DestinationType::Mountain),
            ("andes", DestinationType::Mountain),
            ("trek", DestinationType::Adventure),
            ("safari", DestinationType::Adventure),
            ("jungle", DestinationType::Adventure),
            ("temple", DestinationType::Cultural),
            ("museum", DestinationType::Cultural),
            ("heritage", DestinationType::Cultural),
        ];
        HINTS
            .iter()
            .find(|(hint, _)| lower.contains(hint))
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DestinationType::Beach => "beach",
            DestinationType::Mountain => "mountain",
            DestinationType::City => "city",
            DestinationType::Cultural => "cultural",
            DestinationType::Adventure => "adventure",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DestinationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beach" => Ok(DestinationType::Beach),
            "mountain" => Ok(DestinationType::Mountain),
            "city" => Ok(DestinationType::City),
            "cultural" => Ok(DestinationType::Cultural),
            "adventure" => Ok(DestinationType::Adventure),
            other => Err(format!(
                "unknown destination_type '{}'; expected beach, mountain, city, cultural or adventure",
                other
            )),
        }
    }
}

/// Spending tier, drives the fixed cost tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    Budget,
    MidRange,
    Luxury,
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BudgetRange::Budget => "budget",
            BudgetRange::MidRange => "mid-range",
            BudgetRange::Luxury => "luxury",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(BudgetRange::Budget),
            "mid-range" | "midrange" => Ok(BudgetRange::MidRange),
            "luxury" => Ok(BudgetRange::Luxury),
            other => Err(format!(
                "unknown budget_range '{}'; expected budget, mid-range or luxury",
                other
            )),
        }
    }
}

/// How the traveler wants the trip to feel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Relaxed,
    Adventure,
    Cultural,
    Party,
    Romantic,
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Adventure => "adventure",
            TravelStyle::Cultural => "cultural",
            TravelStyle::Party => "party",
            TravelStyle::Romantic => "romantic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(TravelStyle::Relaxed),
            "adventure" => Ok(TravelStyle::Adventure),
            "cultural" => Ok(TravelStyle::Cultural),
            "party" => Ok(TravelStyle::Party),
            "romantic" => Ok(TravelStyle::Romantic),
            other => Err(format!(
                "unknown travel_style '{}'; expected relaxed, adventure, cultural, party or romantic",
                other
            )),
        }
    }
}

/// Full preference set for an itinerary request
///
/// `destination` is set when the traveler already picked a concrete place;
/// that variant of the task gets a slightly larger model-call budget.
/// Unknown extra fields on the wire are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub destination_type: DestinationType,
    pub budget_range: BudgetRange,
    pub travel_style: TravelStyle,
    /// Trip duration in days, must be >= 1
    pub duration: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    pub vibe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}
