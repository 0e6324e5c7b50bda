//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(version)]
#[command(about = "Match a resume against a job description")]
#[command(long_about = "Score a resume against a job description, list matched and missing skills, \
estimate the experience gap, predict a role and run ATS formatting checks")]
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
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long, conflicts_with = "resume_text", required_unless_present = "resume_text")]
        resume: Option<PathBuf>,

        /// Resume given inline as text
        #[arg(long)]
        resume_text: Option<String>,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline as text
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long, value_parser = parse_output_format)]
        output: Option<OutputFormat>,

        /// Save output to a file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Score by word overlap instead of embeddings
        #[arg(long)]
        lexical: bool,

        /// Include extracted skills, keywords and the resume text
        #[arg(short, long)]
        detailed: bool,
    },

    /// Analyze the bundled sample resume and job description
    Demo {
        /// Output format: console, json, markdown, html
        #[arg(short, long, value_parser = parse_output_format)]
        output: Option<OutputFormat>,

        /// Score by word overlap instead of embeddings
        #[arg(long)]
        lexical: bool,
    },

    /// List the skill catalog, or the catalog skills found in a file
    Skills {
        /// File to scan for skills
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show configuration
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

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension. Files without one are read as plain text.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
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
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["txt", "md"];
        assert!(validate_file_extension(Path::new("job.TXT"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("job"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), &allowed).is_err());
    }

    #[test]
    fn test_analyze_requires_one_source_each() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "analyze",
            "--resume-text",
            "Python",
            "--job",
            "jd.txt",
            "--output",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze { resume, resume_text, job, output, .. } => {
                assert!(resume.is_none());
                assert_eq!(resume_text.as_deref(), Some("Python"));
                assert_eq!(job, Some(PathBuf::from("jd.txt")));
                assert_eq!(output, Some(OutputFormat::Json));
            }
            _ => panic!("expected analyze"),
        }

        assert!(Cli::try_parse_from(["resume-matcher", "analyze", "--job-text", "x"]).is_err());
        assert!(Cli::try_parse_from([
            "resume-matcher",
            "analyze",
            "--resume",
            "a.txt",
            "--resume-text",
            "x",
            "--job-text",
            "y",
        ])
        .is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
