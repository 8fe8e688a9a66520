//! Match engine: scores a user profile against every catalog entry

use crate::catalog::{JobProfile, Personality};
use crate::config::ScoringConfig;
use crate::error::{CareerCompassError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Per-request user profile. Built by the caller from manual input
/// and/or scanner suggestions, discarded after analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub selected_skills: Vec<String>,
    pub selected_interests: Vec<String>,
    /// Mathematics score, 0-100.
    pub math_score: u8,
    /// Programming/CS score, 0-100.
    pub code_score: u8,
    pub personality: Personality,
}

/// Score components, kept alongside the final score for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match_pct: f32,
    pub interest_bonus: f32,
    pub math_penalty: f32,
    pub code_penalty: f32,
    pub personality_bonus: f32,
}

/// Result of scoring one job for one request.
///
/// Invariants: `score` is clamped to [0, 100]; `matched_skills` and
/// `missing_skills` are disjoint, both in catalog listing order, and
/// together cover the job's required skills exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobProfile,
    pub score: f32,
    pub matched_skills: Vec<String>,
    /// Full ordered list; display truncation is the formatter's call.
    pub missing_skills: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult {
    pub fn label(&self) -> MatchLabel {
        MatchLabel::from_score(self.score)
    }
}

/// Presentation bucket derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    High,
    Medium,
    Low,
}

impl MatchLabel {
    pub fn from_score(score: f32) -> Self {
        if score > 80.0 {
            MatchLabel::High
        } else if score > 50.0 {
            MatchLabel::Medium
        } else {
            MatchLabel::Low
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLabel::High => write!(f, "high"),
            MatchLabel::Medium => write!(f, "medium"),
            MatchLabel::Low => write!(f, "low"),
        }
    }
}

/// Stateless scorer over the read-only catalog.
pub struct MatchEngine {
    scoring: ScoringConfig,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_config(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Score one job against the user profile.
    ///
    /// Total: never fails. A job with no required skills contributes a
    /// 0% skill share instead of dividing by zero.
    pub fn score(&self, job: &JobProfile, user: &UserProfile) -> MatchResult {
        let selected: HashSet<&str> = user.selected_skills.iter().map(String::as_str).collect();

        let matched_skills: Vec<String> = job
            .required_skills
            .iter()
            .filter(|skill| selected.contains(skill.as_str()))
            .cloned()
            .collect();
        let missing_skills: Vec<String> = job
            .required_skills
            .iter()
            .filter(|skill| !selected.contains(skill.as_str()))
            .cloned()
            .collect();

        let skill_match_pct = if job.required_skills.is_empty() {
            0.0
        } else {
            matched_skills.len() as f32 / job.required_skills.len() as f32 * 100.0
        };

        let interests: HashSet<&str> = user
            .selected_interests
            .iter()
            .map(String::as_str)
            .collect();
        let interest_overlap = job
            .required_interests
            .iter()
            .filter(|interest| interests.contains(interest.as_str()))
            .count();
        let interest_bonus = self.scoring.interest_bonus * interest_overlap as f32;

        let math_penalty = if user.math_score < job.min_math {
            self.scoring.threshold_penalty
        } else {
            0.0
        };
        let code_penalty = if user.code_score < job.min_code {
            self.scoring.threshold_penalty
        } else {
            0.0
        };

        // A user declaring Any never earns the bonus: equality with a
        // non-Any preference is impossible then.
        let personality_bonus = if job.preferred_personality != Personality::Any
            && user.personality == job.preferred_personality
        {
            self.scoring.personality_bonus
        } else {
            0.0
        };

        let raw =
            skill_match_pct + interest_bonus - math_penalty - code_penalty + personality_bonus;
        let score = raw.clamp(0.0, 100.0);

        MatchResult {
            job: job.clone(),
            score,
            matched_skills,
            missing_skills,
            breakdown: ScoreBreakdown {
                skill_match_pct,
                interest_bonus,
                math_penalty,
                code_penalty,
                personality_bonus,
            },
        }
    }

    /// Score every job and return the best `top_n`, highest first.
    ///
    /// Ties keep catalog order (the sort is stable). An empty skill
    /// selection is rejected before any scoring runs.
    pub fn rank(
        &self,
        jobs: &[JobProfile],
        user: &UserProfile,
        top_n: usize,
    ) -> Result<Vec<MatchResult>> {
        if user.selected_skills.is_empty() {
            return Err(CareerCompassError::EmptySelection);
        }

        let mut results: Vec<MatchResult> =
            jobs.iter().map(|job| self.score(job, user)).collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(top_n);

        debug!(
            "ranked {} jobs for a profile with {} skills, kept top {}",
            jobs.len(),
            user.selected_skills.len(),
            results.len()
        );
        Ok(results)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DemandTrend;

    fn job(title: &str, skills: &[&str], interests: &[&str]) -> JobProfile {
        JobProfile {
            title: title.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            required_interests: interests.iter().map(|i| i.to_string()).collect(),
            min_math: 50,
            min_code: 50,
            preferred_personality: Personality::Introvert,
            salary_range: "$100k-$140k".to_string(),
            demand_trend: DemandTrend::High,
        }
    }

    fn user(skills: &[&str], interests: &[&str]) -> UserProfile {
        UserProfile {
            selected_skills: skills.iter().map(|s| s.to_string()).collect(),
            selected_interests: interests.iter().map(|i| i.to_string()).collect(),
            math_score: 60,
            code_score: 60,
            personality: Personality::Introvert,
        }
    }

    #[test]
    fn test_worked_example() {
        // Job A: skills {Python, SQL}, interest {Data}, thresholds 50/50,
        // prefers Introvert. User: {Python}, {Data}, 60/60, Introvert.
        // skill% 50 + interest 15 + personality 5 = 70, missing [SQL].
        let engine = MatchEngine::new();
        let result = engine.score(&job("Job A", &["Python", "SQL"], &["Data"]), &user(&["Python"], &["Data"]));

        assert_eq!(result.breakdown.skill_match_pct, 50.0);
        assert_eq!(result.breakdown.interest_bonus, 15.0);
        assert_eq!(result.breakdown.math_penalty, 0.0);
        assert_eq!(result.breakdown.code_penalty, 0.0);
        assert_eq!(result.breakdown.personality_bonus, 5.0);
        assert_eq!(result.score, 70.0);
        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["SQL"]);
    }

    #[test]
    fn test_math_penalty_applies_below_threshold() {
        let engine = MatchEngine::new();
        let mut low_math = user(&["Python"], &["Data"]);
        low_math.math_score = 40;

        let result = engine.score(&job("Job A", &["Python", "SQL"], &["Data"]), &low_math);
        assert_eq!(result.breakdown.math_penalty, 10.0);
        assert_eq!(result.score, 60.0);
    }

    #[test]
    fn test_both_penalties_stack() {
        let engine = MatchEngine::new();
        let mut weak = user(&["Python"], &[]);
        weak.math_score = 10;
        weak.code_score = 10;

        let result = engine.score(&job("Job A", &["Python", "SQL"], &["Data"]), &weak);
        assert_eq!(result.breakdown.math_penalty, 10.0);
        assert_eq!(result.breakdown.code_penalty, 10.0);
        // 50 - 20, no bonuses except personality (+5).
        assert_eq!(result.score, 35.0);
    }

    #[test]
    fn test_empty_required_skills_scores_zero_share() {
        let engine = MatchEngine::new();
        let result = engine.score(&job("Generalist", &[], &[]), &user(&["Python"], &[]));

        assert_eq!(result.breakdown.skill_match_pct, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_score_is_clamped_to_range() {
        let engine = MatchEngine::new();

        // Many overlapping interests push the raw sum far above 100.
        let interests = ["AI", "Web", "Data", "Design", "Security", "Business"];
        let hot = engine.score(
            &job("Everything", &["Python"], &interests),
            &user(&["Python"], &interests),
        );
        assert_eq!(hot.score, 100.0);

        // No matched skills plus both penalties would go below zero.
        let mut hopeless = user(&["Cobol"], &[]);
        hopeless.math_score = 0;
        hopeless.code_score = 0;
        hopeless.personality = Personality::Extrovert;
        let cold = engine.score(&job("Job A", &["Python", "SQL"], &["Data"]), &hopeless);
        assert_eq!(cold.score, 0.0);
    }

    #[test]
    fn test_matched_and_missing_partition_required_skills() {
        let engine = MatchEngine::new();
        let the_job = job("Job A", &["Python", "SQL", "Spark"], &[]);
        let result = engine.score(&the_job, &user(&["SQL"], &[]));

        let mut union: Vec<&String> = result
            .matched_skills
            .iter()
            .chain(result.missing_skills.iter())
            .collect();
        union.sort();
        let mut required: Vec<&String> = the_job.required_skills.iter().collect();
        required.sort();
        assert_eq!(union, required);
        assert!(result
            .matched_skills
            .iter()
            .all(|skill| !result.missing_skills.contains(skill)));

        // Catalog listing order survives filtering.
        assert_eq!(result.missing_skills, vec!["Python", "Spark"]);
    }

    #[test]
    fn test_any_personality_never_earns_bonus() {
        let engine = MatchEngine::new();

        let mut ambivert = user(&["Python"], &[]);
        ambivert.personality = Personality::Any;

        let mut any_job = job("Open Role", &["Python"], &[]);
        any_job.preferred_personality = Personality::Any;

        // User Any vs job Introvert: no bonus.
        let vs_introvert = engine.score(&job("Job A", &["Python"], &[]), &ambivert);
        assert_eq!(vs_introvert.breakdown.personality_bonus, 0.0);

        // User Any vs job Any: still no bonus.
        let vs_any = engine.score(&any_job, &ambivert);
        assert_eq!(vs_any.breakdown.personality_bonus, 0.0);
    }

    #[test]
    fn test_rank_sorts_descending_and_truncates() {
        let engine = MatchEngine::new();
        let jobs = vec![
            job("Partial", &["Python", "SQL", "Spark", "Airflow"], &[]),
            job("Strong", &["Python", "SQL"], &[]),
            job("None", &["Figma"], &[]),
        ];

        let ranked = engine.rank(&jobs, &user(&["Python", "SQL"], &[]), 2).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.title, "Strong");
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let engine = MatchEngine::new();
        // Identical requirements score identically; catalog order decides.
        let jobs = vec![
            job("First", &["Python"], &[]),
            job("Second", &["Python"], &[]),
            job("Third", &["Python"], &[]),
        ];

        let ranked = engine.rank(&jobs, &user(&["Python"], &[]), 3).unwrap();
        let titles: Vec<&str> = ranked.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_selection_is_rejected_before_scoring() {
        let engine = MatchEngine::new();
        let jobs = vec![job("Job A", &["Python"], &[])];

        let result = engine.rank(&jobs, &user(&[], &["Data"]), 3);
        assert!(matches!(result, Err(CareerCompassError::EmptySelection)));
    }

    #[test]
    fn test_scores_stay_in_range_across_profiles() {
        let engine = MatchEngine::new();
        let jobs = vec![
            job("Job A", &["Python", "SQL"], &["Data", "AI"]),
            job("Job B", &[], &[]),
            job("Job C", &["Rust"], &["Systems"]),
        ];
        let profiles = vec![
            user(&["Python", "SQL", "Rust"], &["Data", "AI", "Systems"]),
            user(&["Cobol"], &[]),
            user(&["Rust"], &["Systems", "Data", "AI"]),
        ];

        for profile in &profiles {
            for the_job in &jobs {
                let result = engine.score(the_job, profile);
                assert!((0.0..=100.0).contains(&result.score));
            }
        }
    }

    #[test]
    fn test_label_buckets() {
        assert_eq!(MatchLabel::from_score(95.0), MatchLabel::High);
        assert_eq!(MatchLabel::from_score(80.0), MatchLabel::Medium);
        assert_eq!(MatchLabel::from_score(51.0), MatchLabel::Medium);
        assert_eq!(MatchLabel::from_score(50.0), MatchLabel::Low);
        assert_eq!(MatchLabel::from_score(0.0), MatchLabel::Low);
    }
}
