//! CLI interface for career compass

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Career path recommendations from skills, scores and interests")]
#[command(long_about = "Match a user profile against a job catalog, with optional resume scanning to pre-fill the skill selection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze career fit for a user profile
    Analyze {
        /// Path to the job catalog CSV (defaults to the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Resume to scan for skills (PDF, TXT, MD)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Comma-separated skills, merged with resume-detected ones
        #[arg(short, long)]
        skills: Option<String>,

        /// Comma-separated interests
        #[arg(short, long)]
        interests: Option<String>,

        /// Mathematics score (0-100)
        #[arg(long, default_value_t = 75)]
        math: u8,

        /// Programming/CS score (0-100)
        #[arg(long, default_value_t = 70)]
        code: u8,

        /// Personality type: introvert, extrovert, any
        #[arg(short, long, default_value = "any")]
        personality: String,

        /// Number of top matches to return
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Output detailed score breakdowns and roadmaps
        #[arg(short, long)]
        detailed: bool,
    },

    /// Inspect the job catalog
    Catalog {
        /// Path to the job catalog CSV (defaults to the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog entries
    List,

    /// Print the derived skill vocabulary
    Vocabulary,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Split a comma-separated CLI value into trimmed, non-empty tokens
pub fn parse_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
