//! Catalog loading and indexing

use crate::catalog::types::{DemandTrend, JobProfile, Personality};
use crate::error::{CareerCompassError, Result};
use log::info;
use std::collections::BTreeSet;
use std::path::Path;

/// Read-only job catalog plus the skill vocabulary derived from it.
///
/// Loaded once per process and shared by reference across scoring
/// requests. Nothing mutates it after load.
pub struct CatalogStore {
    jobs: Vec<JobProfile>,
    vocabulary: Vec<String>,
}

impl CatalogStore {
    /// Load the catalog from a CSV file.
    ///
    /// Expected columns: `Job Title, Skills, Interests, Min_Math,
    /// Min_Code, Personality, Salary_Range, Trend_Growth`. The Skills
    /// and Interests fields are comma-joined token lists.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerCompassError::DataLoad(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CareerCompassError::DataLoad(format!(
                "failed to read catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        let store = Self::from_reader(&content)?;
        info!(
            "Loaded catalog '{}': {} roles, {} distinct skills",
            path.display(),
            store.jobs.len(),
            store.vocabulary.len()
        );
        Ok(store)
    }

    /// Parse catalog rows from an in-memory CSV buffer.
    pub fn from_reader(content: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| CareerCompassError::DataLoad(format!("failed to read catalog header: {}", e)))?
            .clone();

        let column = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    CareerCompassError::DataLoad(format!("missing required column '{}'", name))
                })
        };

        let title_col = column("Job Title")?;
        let skills_col = column("Skills")?;
        let interests_col = column("Interests")?;
        let min_math_col = column("Min_Math")?;
        let min_code_col = column("Min_Code")?;
        let personality_col = column("Personality")?;
        let salary_col = column("Salary_Range")?;
        let trend_col = column("Trend_Growth")?;

        let mut jobs = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            // Header is line 1, so data rows start at line 2.
            let line = idx + 2;
            let record = record.map_err(|e| {
                CareerCompassError::DataLoad(format!("catalog line {}: {}", line, e))
            })?;

            let field = |col: usize, name: &str| -> Result<String> {
                record
                    .get(col)
                    .map(|value| value.trim().to_string())
                    .ok_or_else(|| {
                        CareerCompassError::DataLoad(format!(
                            "catalog line {}: missing value for '{}'",
                            line, name
                        ))
                    })
            };

            let title = field(title_col, "Job Title")?;
            if title.is_empty() {
                return Err(CareerCompassError::DataLoad(format!(
                    "catalog line {}: empty job title",
                    line
                )));
            }

            let preferred_personality = field(personality_col, "Personality")?
                .parse::<Personality>()
                .map_err(|e| {
                    CareerCompassError::DataLoad(format!("catalog line {}: {}", line, e))
                })?;

            jobs.push(JobProfile {
                title,
                required_skills: split_tokens(&field(skills_col, "Skills")?),
                required_interests: split_tokens(&field(interests_col, "Interests")?),
                min_math: parse_threshold(&field(min_math_col, "Min_Math")?, "Min_Math", line)?,
                min_code: parse_threshold(&field(min_code_col, "Min_Code")?, "Min_Code", line)?,
                preferred_personality,
                salary_range: field(salary_col, "Salary_Range")?,
                demand_trend: DemandTrend::parse(&field(trend_col, "Trend_Growth")?),
            });
        }

        let vocabulary = derive_vocabulary(&jobs);
        Ok(Self { jobs, vocabulary })
    }

    pub fn jobs(&self) -> &[JobProfile] {
        &self.jobs
    }

    /// All distinct skill tokens across the catalog, sorted ascending.
    /// Deterministic given the same catalog: built from a BTreeSet, not
    /// hash-set iteration order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Split a comma-joined field into trimmed, unquoted, non-empty tokens.
fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| {
            token
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_threshold(raw: &str, name: &str, line: usize) -> Result<u8> {
    let value = raw.parse::<u8>().map_err(|_| {
        CareerCompassError::DataLoad(format!(
            "catalog line {}: '{}' is not a valid {} score",
            line, raw, name
        ))
    })?;
    if value > 100 {
        return Err(CareerCompassError::DataLoad(format!(
            "catalog line {}: {} score {} is out of range 0-100",
            line, name, value
        )));
    }
    Ok(value)
}

fn derive_vocabulary(jobs: &[JobProfile]) -> Vec<String> {
    jobs.iter()
        .flat_map(|job| job.required_skills.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
