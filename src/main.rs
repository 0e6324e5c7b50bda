//! Resume matcher: score a resume against a job description from the command line

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::samples::load_samples;
use resume_matcher::input::{DocumentSource, InputManager};
use resume_matcher::output::{
    resolve_save_path, save_report_to_file, AnalysisReport, ReportGenerator,
};
use resume_matcher::processing::{AnalysisEngine, ScoringStrategy};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

const INLINE_TEXT: &str = "inline text";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            resume_text,
            job,
            job_text,
            output,
            save,
            lexical,
            detailed,
        } => {
            let mut input_manager = InputManager::new();

            let (resume_source, resume_label) = match (resume, resume_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["pdf", "txt", "md", "markdown"])
                        .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
                    println!("📄 Resume: {}", path.display());
                    (input_manager.load_source(&path).await?, path.display().to_string())
                }
                (None, Some(text)) => (DocumentSource::Text(text), INLINE_TEXT.to_string()),
                (None, None) => {
                    return Err(ResumeMatcherError::MissingInput(
                        "provide --resume or --resume-text".to_string(),
                    ))
                }
            };

            let (job_text, job_label) = match (job, job_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown"]).map_err(|e| {
                        ResumeMatcherError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    println!("💼 Job Description: {}", path.display());
                    (input_manager.extract_text(&path).await?, path.display().to_string())
                }
                (None, Some(text)) => (text, INLINE_TEXT.to_string()),
                (None, None) => {
                    return Err(ResumeMatcherError::MissingInput(
                        "provide --job or --job-text".to_string(),
                    ))
                }
            };

            let engine = build_engine(&config, lexical)?;
            let report = run_analysis(engine, resume_source, job_text, resume_label, job_label).await?;

            let format = output.unwrap_or(config.output.format);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                // colors never go to files
                let plain = ReportGenerator::with_options(
                    false,
                    detailed || config.output.detailed,
                    true,
                    true,
                    true,
                );
                let save_format = output.unwrap_or_else(|| format_for_path(&save_path, format));
                let save_path =
                    resolve_save_path(&save_path, save_format, &report.metadata.resume_source);
                save_report_to_file(&plain.generate_report(&report, save_format)?, &save_path)?;
                println!("💾 Report saved to: {}", save_path.display());
            }
        }

        Commands::Demo { output, lexical } => {
            println!("🎯 Running demo on bundled sample data");

            let samples = match load_samples(&config.samples).await {
                Ok(samples) => samples,
                Err(e @ ResumeMatcherError::SampleDataMissing(_)) => {
                    warn!("{}", e);
                    println!(
                        "💡 Place {} and {} in '{}' or set [samples] in the configuration",
                        config.samples.resume_file,
                        config.samples.job_file,
                        config.samples.dir.display()
                    );
                    return Err(e);
                }
                Err(e) => return Err(e),
            };

            let (resume_path, job_path) = config.sample_paths();
            let engine = build_engine(&config, lexical)?;
            let report = run_analysis(
                engine,
                DocumentSource::Text(samples.resume),
                samples.job_description,
                resume_path.display().to_string(),
                job_path.display().to_string(),
            )
            .await?;

            let format = output.unwrap_or(config.output.format);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                true,
                true,
                true,
            );
            println!("{}", generator.generate_report(&report, format)?);
        }

        Commands::Skills { file } => {
            let engine = build_engine(&config, true)?;
            let catalog = &engine.reference().catalog;

            match file {
                Some(path) => {
                    let text = InputManager::new().extract_text(&path).await?;
                    let found = engine.extract_skills(&text);

                    println!("🔍 {} catalog skill(s) found in {}\n", found.len(), path.display());
                    for skill in &found {
                        let category = catalog.category_of(skill).unwrap_or("Other");
                        println!("  • {} ({})", skill, category);
                    }
                }
                None => {
                    println!("📚 Skill catalog ({} skills)\n", catalog.len());
                    for category in catalog.categories() {
                        println!("{}:", category.name);
                        println!("  {}\n", category.skills.join(", "));
                    }
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn build_engine(config: &Config, lexical: bool) -> Result<AnalysisEngine> {
    let engine = AnalysisEngine::from_config(config)?;
    if lexical {
        info!("Lexical scoring requested");
        Ok(engine.with_strategy(ScoringStrategy::Lexical))
    } else {
        Ok(engine)
    }
}

/// Runs the pipeline off the async runtime while a spinner is shown
async fn run_analysis(
    engine: AnalysisEngine,
    resume: DocumentSource,
    job_text: String,
    resume_label: String,
    job_label: String,
) -> Result<AnalysisReport> {
    let scoring_method = engine.strategy().label();
    let spinner = spinner(&format!("Analyzing ({})...", scoring_method));

    let outcome = tokio::task::spawn_blocking(move || engine.analyze_sources(&resume, &job_text)).await;
    spinner.finish_and_clear();

    let result = outcome.map_err(|e| ResumeMatcherError::Processing(e.to_string()))??;
    Ok(AnalysisReport::new(result, scoring_method, resume_label, job_label))
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Format implied by a save path's extension
fn format_for_path(path: &Path, fallback: OutputFormat) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => OutputFormat::Json,
        Some("md") | Some("markdown") => OutputFormat::Markdown,
        Some("html") | Some("htm") => OutputFormat::Html,
        Some("txt") => OutputFormat::Console,
        _ => fallback,
    }
}
