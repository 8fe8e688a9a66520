//! Output formatters - console, JSON, and markdown renderings

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{CareerReport, RankedMatch};
use crate::processing::MatchLabel;
use colored::Colorize;

/// How many missing skills the console view shows before eliding.
/// Display truncation only: the engine always carries the full list.
const MISSING_DISPLAY_LIMIT: usize = 3;

/// Trait for formatting career reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored match labels
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and shared reports
pub struct MarkdownFormatter;

/// Routes a report to the formatter matching the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn label_text(&self, label: MatchLabel, score: f32) -> String {
        let text = format!("{:.1}% ({})", score, label);
        if !self.use_colors {
            return text;
        }
        match label {
            MatchLabel::High => text.green().bold().to_string(),
            MatchLabel::Medium => text.yellow().bold().to_string(),
            MatchLabel::Low => text.red().bold().to_string(),
        }
    }

    fn format_match(&self, entry: &RankedMatch) -> String {
        let mut out = String::new();
        let result = &entry.result;

        out.push_str(&format!("{}. {}\n", entry.rank, result.job.title));
        out.push_str(&format!(
            "   Match:  {}\n",
            self.label_text(entry.label, result.score)
        ));
        out.push_str(&format!("   Salary: {}\n", result.job.salary_range));
        out.push_str(&format!("   Demand: {}\n", result.job.demand_trend));

        if result.missing_skills.is_empty() {
            out.push_str("   You have the core skills!\n");
        } else {
            let shown: Vec<&str> = result
                .missing_skills
                .iter()
                .take(MISSING_DISPLAY_LIMIT)
                .map(String::as_str)
                .collect();
            let suffix = if result.missing_skills.len() > MISSING_DISPLAY_LIMIT {
                "..."
            } else {
                ""
            };
            out.push_str(&format!("   Missing: {}{}\n", shown.join(", "), suffix));
        }

        if self.detailed {
            let b = &result.breakdown;
            out.push_str(&format!(
                "   Breakdown: skills {:.1}%, interests +{:.1}, penalties -{:.1}, personality +{:.1}\n",
                b.skill_match_pct,
                b.interest_bonus,
                b.math_penalty + b.code_penalty,
                b.personality_bonus
            ));
            if !result.matched_skills.is_empty() {
                out.push_str(&format!(
                    "   Matched skills: {}\n",
                    result.matched_skills.join(", ")
                ));
            }

            out.push_str("   Roadmap:\n");
            for step in &entry.roadmap.steps {
                out.push_str(&format!("     - {}\n", step));
            }
            if let Some(hint) = &entry.roadmap.focus_hint {
                out.push_str(&format!("     - {}\n", hint));
            }

            let projection = &entry.demand_projection;
            let points: Vec<String> = projection
                .years
                .iter()
                .zip(&projection.index)
                .map(|(year, index)| format!("{}: {}", year, index))
                .collect();
            out.push_str(&format!(
                "   Demand outlook (illustrative, baseline 100): {}\n",
                points.join(", ")
            ));
        }

        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Top {} career matches ({} skills, {} interests considered)\n\n",
            report.matches.len(),
            report.skills_considered,
            report.interests_considered
        ));

        for entry in &report.matches {
            out.push_str(&self.format_match(entry));
            out.push('\n');
        }

        Ok(out.trim_end().to_string())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Career Match Report\n\n");
        out.push_str(&format!(
            "Profile: {} skills, {} interests.\n\n",
            report.skills_considered, report.interests_considered
        ));

        for entry in &report.matches {
            let result = &entry.result;
            out.push_str(&format!("## {}. {}\n\n", entry.rank, result.job.title));
            out.push_str(&format!(
                "- **Match:** {:.1}% ({})\n",
                result.score, entry.label
            ));
            out.push_str(&format!("- **Salary:** {}\n", result.job.salary_range));
            out.push_str(&format!("- **Demand:** {}\n", result.job.demand_trend));

            if result.missing_skills.is_empty() {
                out.push_str("- **Missing skills:** none\n");
            } else {
                out.push_str(&format!(
                    "- **Missing skills:** {}\n",
                    result.missing_skills.join(", ")
                ));
            }

            out.push_str("\n### Learning roadmap\n\n");
            for step in &entry.roadmap.steps {
                out.push_str(&format!("1. {}\n", step));
            }
            if let Some(hint) = &entry.roadmap.focus_hint {
                out.push_str(&format!("\n> {}\n", hint));
            }
            out.push('\n');
        }

        Ok(out.trim_end().to_string())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(detailed: bool, color_output: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(color_output, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &CareerReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DemandTrend, JobProfile, Personality};
    use crate::processing::{MatchEngine, UserProfile};

    fn sample_report() -> CareerReport {
        let jobs = vec![JobProfile {
            title: "Data Scientist".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "SQL".to_string(),
                "Pandas".to_string(),
                "Statistics".to_string(),
                "Spark".to_string(),
            ],
            required_interests: vec!["Data".to_string()],
            min_math: 60,
            min_code: 50,
            preferred_personality: Personality::Introvert,
            salary_range: "$110k-$150k".to_string(),
            demand_trend: DemandTrend::High,
        }];
        let user = UserProfile {
            selected_skills: vec!["Python".to_string()],
            selected_interests: vec!["Data".to_string()],
            math_score: 70,
            code_score: 70,
            personality: Personality::Introvert,
        };
        let results = MatchEngine::new().rank(&jobs, &user, 3).unwrap();
        CareerReport::new(results, &user)
    }

    #[test]
    fn test_console_truncates_missing_skills_for_display() {
        let report = sample_report();
        let formatter = ConsoleFormatter::new(false, false);
        let rendered = formatter.format_report(&report).unwrap();

        // Four skills are missing; only three appear, with an ellipsis.
        assert!(rendered.contains("SQL, Pandas, Statistics..."));
        assert!(!rendered.contains("Spark"));

        // The underlying report still carries the full list.
        assert_eq!(report.matches[0].result.missing_skills.len(), 4);
    }

    #[test]
    fn test_console_detailed_includes_breakdown() {
        let report = sample_report();
        let formatter = ConsoleFormatter::new(false, true);
        let rendered = formatter.format_report(&report).unwrap();

        assert!(rendered.contains("Breakdown:"));
        assert!(rendered.contains("Roadmap:"));
        assert!(rendered.contains("Demand outlook"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let report = sample_report();
        let formatter = JsonFormatter::new(false);
        let rendered = formatter.format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["matches"][0]["rank"], 1);
        assert_eq!(value["matches"][0]["result"]["job"]["title"], "Data Scientist");
    }

    #[test]
    fn test_markdown_lists_full_missing_skills() {
        let report = sample_report();
        let rendered = MarkdownFormatter.format_report(&report).unwrap();

        assert!(rendered.starts_with("# Career Match Report"));
        assert!(rendered.contains("SQL, Pandas, Statistics, Spark"));
    }
}
