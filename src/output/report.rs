//! Career report structures built from ranked match results

use crate::catalog::DemandTrend;
use crate::processing::{MatchLabel, MatchResult, UserProfile};
use serde::{Deserialize, Serialize};

const PROJECTION_BASE_YEAR: u16 = 2024;
const PROJECTION_SPAN: usize = 5;
const PROJECTION_BASELINE: u32 = 100;

/// Full analysis output handed to the formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReport {
    pub matches: Vec<RankedMatch>,

    /// Profile size, for the report header.
    pub skills_considered: usize,
    pub interests_considered: usize,
}

/// One recommended role with its presentation extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    /// 1-based position in the ranking.
    pub rank: usize,

    pub result: MatchResult,

    /// Display bucket for the score.
    pub label: MatchLabel,

    /// Follow-up study plan for the role.
    pub roadmap: LearningRoadmap,

    /// Illustrative demand outlook, display only.
    pub demand_projection: DemandProjection,
}

/// Study plan derived from the match diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub steps: Vec<String>,

    /// Title-keyed focus hint, when one applies.
    pub focus_hint: Option<String>,
}

/// Five-year demand index for a role, baseline 100.
///
/// Derived from the catalog's demand trend alone. Deterministic and
/// purely illustrative: it never feeds back into scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandProjection {
    pub years: Vec<u16>,
    pub index: Vec<u32>,
}

impl CareerReport {
    pub fn new(results: Vec<MatchResult>, user: &UserProfile) -> Self {
        let matches = results
            .into_iter()
            .enumerate()
            .map(|(idx, result)| {
                let label = result.label();
                let roadmap = LearningRoadmap::for_result(&result);
                let demand_projection = DemandProjection::for_trend(&result.job.demand_trend);
                RankedMatch {
                    rank: idx + 1,
                    result,
                    label,
                    roadmap,
                    demand_projection,
                }
            })
            .collect();

        Self {
            matches,
            skills_considered: user.selected_skills.len(),
            interests_considered: user.selected_interests.len(),
        }
    }
}

impl LearningRoadmap {
    fn for_result(result: &MatchResult) -> Self {
        let mut steps = Vec::new();

        if result.missing_skills.is_empty() {
            steps.push("You already have the core skills for this role.".to_string());
        } else {
            steps.push(format!(
                "Master the missing skills: {}.",
                result.missing_skills.join(", ")
            ));
        }
        steps.push("Build 1-2 capstone projects to showcase them.".to_string());

        let title = result.job.title.as_str();
        let focus_hint = if title.contains("AI") {
            Some("Focus on Python & Math.".to_string())
        } else if title.contains("Web") {
            Some("Focus on React & APIs.".to_string())
        } else {
            None
        };

        Self { steps, focus_hint }
    }
}

impl DemandProjection {
    fn for_trend(trend: &DemandTrend) -> Self {
        let growth = trend.growth_rate();
        let years = (0..PROJECTION_SPAN)
            .map(|i| PROJECTION_BASE_YEAR + i as u16)
            .collect();
        let index = (0..PROJECTION_SPAN)
            .map(|i| PROJECTION_BASELINE + growth * i as u32)
            .collect();
        Self { years, index }
    }
}
