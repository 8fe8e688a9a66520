//! Catalog row types

use crate::error::CareerCompassError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One career entry from the catalog.
///
/// Immutable once loaded and reused across requests: scores are computed
/// into per-request `MatchResult` values, never written back onto the
/// catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    /// Skills in catalog listing order. Missing-skill reporting depends
    /// on this order being preserved.
    pub required_skills: Vec<String>,
    pub required_interests: Vec<String>,
    /// Minimum mathematics score, 0-100.
    pub min_math: u8,
    /// Minimum programming/CS score, 0-100.
    pub min_code: u8,
    pub preferred_personality: Personality,
    pub salary_range: String,
    pub demand_trend: DemandTrend,
}

/// Closed personality enumeration.
///
/// The catalog and user input both use explicit labels; free-text
/// comparison is not allowed, so typos surface as load errors instead
/// of silently missed bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Introvert,
    Extrovert,
    /// Catalog label "Ambivert/Any": no preference either way.
    Any,
}

impl FromStr for Personality {
    type Err = CareerCompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "introvert" => Ok(Personality::Introvert),
            "extrovert" => Ok(Personality::Extrovert),
            "ambivert/any" | "ambivert" | "any" => Ok(Personality::Any),
            other => Err(CareerCompassError::InvalidInput(format!(
                "unknown personality label '{}' (expected introvert, extrovert or ambivert/any)",
                other
            ))),
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Personality::Introvert => write!(f, "Introvert"),
            Personality::Extrovert => write!(f, "Extrovert"),
            Personality::Any => write!(f, "Ambivert/Any"),
        }
    }
}

/// Market demand label for a role.
///
/// Labels outside the known set are preserved verbatim rather than
/// rejected; the catalog uses them for display and the demand
/// projection treats them like the strongest known trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTrend {
    Stable,
    High,
    VeryHigh,
    Other(String),
}

impl DemandTrend {
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "stable" => DemandTrend::Stable,
            "high" => DemandTrend::High,
            "very high" | "veryhigh" => DemandTrend::VeryHigh,
            _ => DemandTrend::Other(trimmed.to_string()),
        }
    }

    /// Annual growth rate of the illustrative demand projection.
    /// Display-only: never an input to scoring.
    pub fn growth_rate(&self) -> u32 {
        match self {
            DemandTrend::Stable => 5,
            DemandTrend::High => 10,
            DemandTrend::VeryHigh | DemandTrend::Other(_) => 15,
        }
    }
}

impl fmt::Display for DemandTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandTrend::Stable => write!(f, "Stable"),
            DemandTrend::High => write!(f, "High"),
            DemandTrend::VeryHigh => write!(f, "Very High"),
            DemandTrend::Other(label) => write!(f, "{}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personality_parsing() {
        assert_eq!("Introvert".parse::<Personality>().unwrap(), Personality::Introvert);
        assert_eq!("extrovert".parse::<Personality>().unwrap(), Personality::Extrovert);
        assert_eq!("Ambivert/Any".parse::<Personality>().unwrap(), Personality::Any);
        assert_eq!(" any ".parse::<Personality>().unwrap(), Personality::Any);
    }

    #[test]
    fn test_personality_rejects_unknown_labels() {
        let result = "Intovert".parse::<Personality>();
        assert!(result.is_err());
    }

    #[test]
    fn test_demand_trend_parsing() {
        assert_eq!(DemandTrend::parse("Stable"), DemandTrend::Stable);
        assert_eq!(DemandTrend::parse("high"), DemandTrend::High);
        assert_eq!(DemandTrend::parse("Very High"), DemandTrend::VeryHigh);
        assert_eq!(
            DemandTrend::parse("Exploding"),
            DemandTrend::Other("Exploding".to_string())
        );
    }

    #[test]
    fn test_growth_rates() {
        assert_eq!(DemandTrend::Stable.growth_rate(), 5);
        assert_eq!(DemandTrend::High.growth_rate(), 10);
        assert_eq!(DemandTrend::VeryHigh.growth_rate(), 15);
        assert_eq!(DemandTrend::Other("Booming".to_string()).growth_rate(), 15);
    }
}
