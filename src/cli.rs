//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "ATS compatibility scoring for resumes with AI-powered feedback")]
#[command(long_about = "Score a resume against ATS heuristics (keywords, formatting, content \
quality, structure) and optionally enrich the report with AI-generated narrative feedback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume for ATS compatibility
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: std::path::PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<std::path::PathBuf>,

        /// Show detailed breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Skip AI narrative feedback (deterministic scoring only)
        #[arg(long)]
        no_ai: bool,

        /// Groq model to use for AI feedback
        #[arg(short, long)]
        model: Option<String>,

        /// Analyze even if the content does not look like a resume
        #[arg(long)]
        force: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
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
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[String]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.iter().any(|a| a == &ext.to_lowercase()) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_output_format() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("MD").is_ok());
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed: Vec<String> = vec!["pdf".into(), "txt".into(), "md".into()];
        assert!(validate_file_extension(&PathBuf::from("resume.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.docx"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &allowed).is_err());
    }
}
