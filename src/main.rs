//! Career compass: career path recommendations from a job catalog

mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use catalog::{CatalogStore, Personality};
use clap::Parser;
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use config::Config;
use error::{CareerCompassError, Result};
use input::file_detector::FileType;
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::ReportGenerator;
use output::report::CareerReport;
use processing::{MatchEngine, SkillScanner, UserProfile};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            catalog,
            resume,
            skills,
            interests,
            math,
            code,
            personality,
            top,
            output,
            detailed,
        } => {
            info!("Starting career path analysis");

            let output_format =
                cli::parse_output_format(&output).map_err(CareerCompassError::InvalidInput)?;

            validate_score(math, "math")?;
            validate_score(code, "code")?;
            let personality: Personality = personality.parse()?;

            let catalog_path = resolve_catalog_path(catalog, &config);
            println!("🧭 Career path analysis");
            println!("📇 Catalog: {}", catalog_path.display());

            let store = CatalogStore::load(&catalog_path).await?;
            println!(
                "   {} roles, {} distinct skills",
                store.len(),
                store.vocabulary().len()
            );

            let mut selected_skills = skills
                .as_deref()
                .map(cli::parse_token_list)
                .unwrap_or_default();

            // Optional resume scan proposes skills; the selection below
            // stays authoritative.
            if let Some(resume_path) = resume {
                cli::validate_file_extension(&resume_path, &FileType::SUPPORTED_EXTENSIONS)
                    .map_err(|e| CareerCompassError::InvalidInput(format!("Resume file: {}", e)))?;

                println!("📄 Scanning resume: {}", resume_path.display());
                let mut input_manager = InputManager::new();
                match input_manager.extract_text(&resume_path).await {
                    Ok(text) => {
                        let scanner = SkillScanner::new(store.vocabulary())?;
                        let detected = scanner.scan(&text);
                        if detected.is_empty() {
                            println!("   No catalog skills found in the resume.");
                        } else {
                            println!("✅ Detected {} skills from the resume", detected.len());
                        }
                        for skill in detected {
                            if !selected_skills.contains(&skill) {
                                selected_skills.push(skill);
                            }
                        }
                    }
                    Err(CareerCompassError::DocumentParse(reason)) => {
                        // Unreadable upload is recoverable: continue with
                        // whatever was supplied manually.
                        warn!("resume unreadable, continuing without it: {}", reason);
                        println!("⚠️  Could not read the resume, using manually supplied skills only.");
                    }
                    Err(e) => return Err(e),
                }
            }

            let user = UserProfile {
                selected_skills,
                selected_interests: interests
                    .as_deref()
                    .map(cli::parse_token_list)
                    .unwrap_or_default(),
                math_score: math,
                code_score: code,
                personality,
            };

            let engine = MatchEngine::with_config(config.scoring.clone());
            let top_n = top.unwrap_or(config.scoring.top_n);
            let results = engine.rank(store.jobs(), &user, top_n)?;

            println!("\n🎉 Analysis complete! Top {} career matches:\n", results.len());

            let report = CareerReport::new(results, &user);
            let generator =
                ReportGenerator::new(detailed || config.output.detailed, config.output.color_output);
            let rendered = generator.format(&report, &output_format)?;
            println!("{}", rendered);
        }

        Commands::Catalog { catalog, action } => {
            let catalog_path = resolve_catalog_path(catalog, &config);
            let store = CatalogStore::load(&catalog_path).await?;

            match action {
                CatalogAction::List => {
                    println!("📇 Catalog: {} ({} roles)\n", catalog_path.display(), store.len());
                    for job in store.jobs() {
                        println!("• {}", job.title);
                        println!("    Skills: {}", job.required_skills.join(", "));
                        println!("    Interests: {}", job.required_interests.join(", "));
                        println!(
                            "    Thresholds: math {}, code {} | Personality: {}",
                            job.min_math, job.min_code, job.preferred_personality
                        );
                        println!(
                            "    Salary: {} | Demand: {}",
                            job.salary_range, job.demand_trend
                        );
                    }
                }
                CatalogAction::Vocabulary => {
                    println!(
                        "🔤 {} distinct skills across {} roles:",
                        store.vocabulary().len(),
                        store.len()
                    );
                    for term in store.vocabulary() {
                        println!("  {}", term);
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Catalog: {}", config.catalog_path().display());
                println!("\nScoring:");
                println!("  Interest bonus: {:.1} per overlap", config.scoring.interest_bonus);
                println!("  Threshold penalty: {:.1}", config.scoring.threshold_penalty);
                println!("  Personality bonus: {:.1}", config.scoring.personality_bonus);
                println!("  Top N: {}", config.scoring.top_n);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn resolve_catalog_path(cli_path: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_path.unwrap_or_else(|| config.catalog.path.clone())
}

fn validate_score(value: u8, name: &str) -> Result<()> {
    if value > 100 {
        return Err(CareerCompassError::InvalidInput(format!(
            "{} score must be between 0 and 100, got {}",
            name, value
        )));
    }
    Ok(())
}
