//! Matching and scoring module

pub mod match_engine;
pub mod skill_scanner;

pub use match_engine::{MatchEngine, MatchLabel, MatchResult, ScoreBreakdown, UserProfile};
pub use skill_scanner::SkillScanner;
