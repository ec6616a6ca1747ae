//! Resume screener: ATS compatibility scoring with AI-powered feedback

mod ai;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod scoring;

use ai::analyzer::AiAnalyzer;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeScreenerError};
use indicatif::ProgressBar;
use input::manager::InputManager;
use input::text_extractor::looks_like_resume;
use log::{error, info, warn};
use output::formatter::ReportGenerator;
use output::report::{ReportMetadata, ScreeningReport};
use scoring::engine::ScoringEngine;
use scoring::text::NormalizedText;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            save,
            detailed,
            no_ai,
            model,
            force,
        } => {
            analyze_resume(&config, resume, output, save, detailed, no_ai, model, force).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("AI Model: {}", config.ai.model);
                println!("API Key Variable: {}", config.ai.api_key_env);
                println!("Max File Size: {} MB", config.input.max_file_size_mb);
                println!(
                    "Supported Extensions: {}",
                    config.input.supported_extensions.join(", ")
                );
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

#[allow(clippy::too_many_arguments)]
async fn analyze_resume(
    config: &Config,
    resume: PathBuf,
    output: String,
    save: Option<PathBuf>,
    detailed: bool,
    no_ai: bool,
    model: Option<String>,
    force: bool,
) -> Result<()> {
    info!("Starting resume analysis");

    cli::validate_file_extension(&resume, &config.input.supported_extensions)
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

    let output_format =
        cli::parse_output_format(&output).map_err(ResumeScreenerError::InvalidInput)?;

    check_file_size(&resume, config.input.max_file_size_mb)?;

    let console_output = output_format == OutputFormat::Console && save.is_none();
    if console_output {
        println!("🚀 ATS compatibility analysis");
        println!("📄 Resume: {}", resume.display());
    }

    let started = Instant::now();

    let mut input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&resume).await?;
    info!("Extracted {} characters", resume_text.len());

    if !looks_like_resume(&resume_text) {
        if force {
            warn!("Content does not look like a resume; continuing because --force was given");
        } else {
            return Err(ResumeScreenerError::InvalidInput(
                "The file content does not look like a resume (too short or missing typical \
                 resume sections). Use --force to analyze it anyway."
                    .to_string(),
            ));
        }
    }

    let engine = ScoringEngine::new()?;
    let score = engine.analyze(&resume_text);
    let word_count = NormalizedText::new(&resume_text).word_count();

    // AI narrative is strictly additive: any failure degrades to the
    // deterministic report alone.
    let mut ai_config = config.ai.clone();
    if let Some(model) = model {
        ai_config.model = model;
    }

    let mut report = ScreeningReport::new(
        score,
        ReportMetadata {
            generated_at: chrono::Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume.to_string_lossy().to_string(),
            word_count,
            processing_time_ms: started.elapsed().as_millis() as u64,
            ai_model: None,
        },
    );

    if !no_ai {
        match config.api_key() {
            Some(api_key) => {
                let analyzer = AiAnalyzer::new(api_key, &ai_config);
                report = enrich_with_ai(report, &analyzer, &resume_text).await;
                report.metadata.processing_time_ms = started.elapsed().as_millis() as u64;
            }
            None => {
                warn!(
                    "No API key found in ${}; skipping AI feedback",
                    ai_config.api_key_env
                );
            }
        }
    }

    let generator = ReportGenerator::new(config.output.color_output, detailed);
    let rendered = generator.generate(&report, &output_format)?;

    match save {
        Some(path) => {
            generator.save_to_file(&rendered, &path)?;
            println!("💾 Report saved to {}", path.display());
            println!(
                "🎯 Analysis complete! Overall ATS score: {}%",
                report.score.overall_score
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Run the three narrative calls, attaching whatever succeeds.
async fn enrich_with_ai(
    report: ScreeningReport,
    analyzer: &AiAnalyzer,
    resume_text: &str,
) -> ScreeningReport {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating AI feedback...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut report = report;
    report.metadata.ai_model = Some(analyzer.model().to_string());

    match analyzer.extract_personal_details(resume_text).await {
        Ok(details) => report = report.with_personal_details(details),
        Err(e) => warn!("Personal detail extraction failed: {}", e),
    }

    match analyzer.summarize(resume_text, report.score.overall_score).await {
        Ok(summary) => report = report.with_ai_summary(summary),
        Err(e) => {
            warn!("AI summary failed, using fallback text: {}", e);
            report = report.with_ai_summary(ai::analyzer::AiSummary::fallback());
        }
    }

    match analyzer
        .dynamic_feedback(resume_text, &report.score.category_scores)
        .await
    {
        Ok(feedback) => report = report.with_ai_feedback(feedback),
        Err(e) => warn!("Content-aware feedback failed: {}", e),
    }

    spinner.finish_and_clear();
    report
}

fn check_file_size(path: &Path, max_mb: u64) -> Result<()> {
    if !path.exists() {
        return Err(ResumeScreenerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }
    let size = std::fs::metadata(path)?.len();
    let max_bytes = max_mb * 1024 * 1024;
    if size > max_bytes {
        return Err(ResumeScreenerError::InvalidInput(format!(
            "File is {} bytes; the maximum supported size is {} MB",
            size, max_mb
        )));
    }
    Ok(())
}
