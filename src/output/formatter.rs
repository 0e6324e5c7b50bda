//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::AnalysisReport;
use crate::processing::analyzer::MatchVerdict;
use crate::processing::heuristics::KeywordCount;
use crate::processing::skills::SkillSet;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Renders an [`AnalysisReport`] in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .verdict-great { background: #28a745; }
        .verdict-good { background: #ffc107; color: #000; }
        .verdict-low { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .skill {
            display: inline-block;
            padding: 2px 10px;
            margin: 3px;
            border-radius: 12px;
            background: #e9ecef;
        }
        .matched { border-left: 4px solid #28a745; }
        .missing { border-left: 4px solid #dc3545; }
        .passed { color: #28a745; }
        .failed { color: #dc3545; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Match Report</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Match Score</h2>
            <h3>{{ match_score }}% <span class="score-badge {{ verdict_class }}">{{ verdict }}</span></h3>
            <p><strong>Predicted role:</strong> {{ predicted_role }}</p>
            <p><strong>Experience:</strong> resume {{ resume_years }} year(s), job {{ job_years }} year(s), gap {{ experience_gap }}</p>
        </div>

        <div class="section">
            <h2>Strong Areas</h2>
            {% if matched_skills.is_empty() %}
            <p>No catalog skills shared with the job description.</p>
            {% else %}
            <div class="matched">
                {% for skill in matched_skills %}<span class="skill">{{ skill }}</span>{% endfor %}
            </div>
            {% endif %}
        </div>

        <div class="section">
            <h2>Missing Skills</h2>
            {% if missing_skills.is_empty() %}
            <p>None. Every skill the job names appears in the resume.</p>
            {% else %}
            <div class="missing">
                {% for skill in missing_skills %}<span class="skill">{{ skill }}</span>{% endfor %}
            </div>
            {% endif %}
            {% if !suggestions.is_empty() %}
            <ul>
                {% for suggestion in suggestions %}<li>{{ suggestion }}</li>{% endfor %}
            </ul>
            {% endif %}
        </div>

        <div class="section">
            <h2>ATS Checklist ({{ ats_percentage }}%)</h2>
            <ul>
                {% for check in ats_checks %}
                <li class="{{ check.class }}">{{ check.mark }} {{ check.name }}</li>
                {% endfor %}
            </ul>
        </div>

        {% if !job_keywords.is_empty() %}
        <div class="section">
            <h2>Top Job Keywords</h2>
            <p>{{ job_keywords }}</p>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by resume-matcher v{{ version }}</strong> | Scoring: {{ scoring_method }}</p>
            <p><strong>Resume:</strong> {{ resume_source }} | <strong>Job:</strong> {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    match_score: String,
    verdict: String,
    verdict_class: String,
    predicted_role: String,
    resume_years: u32,
    job_years: u32,
    experience_gap: u32,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    suggestions: Vec<String>,
    ats_percentage: String,
    ats_checks: Vec<HtmlCheck>,
    job_keywords: String,
    version: String,
    scoring_method: String,
    resume_source: String,
    job_source: String,
}

struct HtmlCheck {
    name: String,
    mark: &'static str,
    class: &'static str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_verdict(&self, verdict: MatchVerdict) -> String {
        let color = match verdict {
            MatchVerdict::Great => Color::Green,
            MatchVerdict::Good => Color::Yellow,
            MatchVerdict::Low => Color::Red,
        };

        if self.use_colors {
            verdict.message().color(color).bold().to_string()
        } else {
            verdict.message().to_string()
        }
    }

    fn format_skill_list(&self, skills: &SkillSet, color: Color) -> String {
        if skills.is_empty() {
            return self.colorize("none", Color::BrightBlack);
        }
        let joined = join_skills(skills);
        self.colorize(&joined, color)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Scoring: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.scoring_method
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Match Score: {:.2}% {}\n",
            result.match_score,
            self.format_verdict(result.verdict)
        ));
        output.push_str(&format!(
            "Predicted Role: {}\n",
            self.colorize(&result.predicted_role, Color::Cyan)
        ));
        output.push_str(&format!(
            "Strong Areas: {}\n",
            self.format_skill_list(&result.matched_skills, Color::Green)
        ));
        output.push_str(&format!(
            "Missing Skills: {}\n",
            self.format_skill_list(&result.missing_skills, Color::Red)
        ));

        let gap = if result.experience_gap > 0 {
            self.colorize(&format!("{} year(s)", result.experience_gap), Color::Yellow)
        } else {
            "none".to_string()
        };
        output.push_str(&format!(
            "Experience Gap: {} (resume {}, job {})\n",
            gap, result.resume_years, result.job_years
        ));

        let improvements = report.improvement_areas();
        if !improvements.is_empty() {
            output.push_str(&self.format_header("Improvement Areas", 3));
            for area in &improvements {
                output.push_str(&format!("  • {}\n", self.colorize(area, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header(
            &format!("ATS Checklist ({:.2}%)", result.ats.percentage),
            3,
        ));
        for check in &result.ats.checks {
            let mark = if check.passed {
                self.colorize("✓", Color::Green)
            } else {
                self.colorize("✗", Color::Red)
            };
            output.push_str(&format!("  {} {}\n", mark, check.name));
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 2));
            output.push_str(&format!(
                "Resume Skills: {}\n",
                self.format_skill_list(&result.resume_skills, Color::White)
            ));
            output.push_str(&format!(
                "Job Skills: {}\n",
                self.format_skill_list(&result.job_skills, Color::White)
            ));
            output.push_str(&format!("Resume Keywords: {}\n", join_keywords(&result.resume_keywords)));
            output.push_str(&format!("Job Keywords: {}\n", join_keywords(&result.job_keywords)));

            output.push_str(&self.format_header("Extracted Resume Text", 3));
            output.push_str(&result.resume_text);
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} resume-matcher v{} | Resume: {} | Job: {}\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.version,
            report.metadata.resume_source,
            report.metadata.job_source
        ));

        Ok(output)
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
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn verdict_badge(verdict: MatchVerdict) -> &'static str {
        match verdict {
            MatchVerdict::Great => "🟢",
            MatchVerdict::Good => "🟡",
            MatchVerdict::Low => "🔴",
        }
    }

    fn skill_line(skills: &SkillSet) -> String {
        if skills.is_empty() {
            "_none_".to_string()
        } else {
            skills
                .iter()
                .map(|s| format!("`{}`", s))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Scoring:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.scoring_method
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                display_name(&report.metadata.resume_source),
                display_name(&report.metadata.job_source)
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {:.2}% {} {}\n\n",
            result.match_score,
            Self::verdict_badge(result.verdict),
            result.verdict.message()
        ));
        output.push_str(&format!("**Predicted Role:** {}\n\n", result.predicted_role));

        output.push_str("| | Resume | Job | Gap |\n");
        output.push_str("|---|---|---|---|\n");
        output.push_str(&format!(
            "| Years of experience | {} | {} | {} |\n\n",
            result.resume_years, result.job_years, result.experience_gap
        ));

        output.push_str("## Skills\n\n");
        output.push_str(&format!("**Strong Areas:** {}\n\n", Self::skill_line(&result.matched_skills)));
        output.push_str(&format!("**Missing Skills:** {}\n\n", Self::skill_line(&result.missing_skills)));

        let improvements = report.improvement_areas();
        if !improvements.is_empty() {
            output.push_str("### Improvement Areas\n\n");
            for area in &improvements {
                output.push_str(&format!("- {}\n", area));
            }
            output.push('\n');
        }

        output.push_str(&format!("## ATS Checklist ({:.2}%)\n\n", result.ats.percentage));
        for check in &result.ats.checks {
            let mark = if check.passed { "x" } else { " " };
            output.push_str(&format!("- [{}] {}\n", mark, check.name));
        }
        output.push('\n');

        if !result.job_keywords.is_empty() {
            output.push_str("## Keywords\n\n");
            output.push_str("| Job | Count |\n|---|---|\n");
            for keyword in &result.job_keywords {
                output.push_str(&format!("| {} | {} |\n", keyword.word, keyword.count));
            }
            output.push('\n');
        }

        if self.detailed {
            output.push_str("## Detailed Analysis\n\n");
            output.push_str(&format!("**Resume Skills:** {}\n\n", Self::skill_line(&result.resume_skills)));
            output.push_str(&format!("**Job Skills:** {}\n\n", Self::skill_line(&result.job_skills)));
            output.push_str("### Extracted Resume Text\n\n");
            output.push_str(&format!("```text\n{}\n```\n\n", result.resume_text));
        }

        output.push_str(&format!("---\n_resume-matcher v{}_\n", report.metadata.version));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let result = &report.result;
        let verdict_class = match result.verdict {
            MatchVerdict::Great => "verdict-great",
            MatchVerdict::Good => "verdict-good",
            MatchVerdict::Low => "verdict-low",
        };

        let ats_checks = result
            .ats
            .checks
            .iter()
            .map(|check| HtmlCheck {
                name: check.name.clone(),
                mark: if check.passed { "✓" } else { "✗" },
                class: if check.passed { "passed" } else { "failed" },
            })
            .collect();

        let suggestions = result
            .skill_suggestions
            .iter()
            .map(|s| format!("\"{}\" looks like {}", s.found, s.skill))
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            match_score: format!("{:.2}", result.match_score),
            verdict: result.verdict.message().to_string(),
            verdict_class: verdict_class.to_string(),
            predicted_role: result.predicted_role.clone(),
            resume_years: result.resume_years,
            job_years: result.job_years,
            experience_gap: result.experience_gap,
            matched_skills: result.matched_skills.iter().cloned().collect(),
            missing_skills: result.missing_skills.iter().cloned().collect(),
            suggestions,
            ats_percentage: format!("{:.2}", result.ats.percentage),
            ats_checks,
            job_keywords: join_keywords(&result.job_keywords),
            version: report.metadata.version.clone(),
            scoring_method: report.metadata.scoring_method.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true, false),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 4] {
        [
            &self.console_formatter,
            &self.json_formatter,
            &self.markdown_formatter,
            &self.html_formatter,
        ]
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        let formatter = self
            .formatters()
            .into_iter()
            .find(|f| f.supports_format() == format)
            .ok_or_else(|| {
                ResumeMatcherError::OutputFormatting(format!("No formatter for {:?}", format))
            })?;
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn join_skills(skills: &SkillSet) -> String {
    skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn join_keywords(keywords: &[KeywordCount]) -> String {
    keywords
        .iter()
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// File name for path sources, the label itself otherwise
fn display_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string())
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where a report is written: `path` itself, or a generated file name inside
/// it when `path` is an existing directory
pub fn resolve_save_path(path: &Path, format: OutputFormat, resume_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, resume_name, true))
    } else {
        path.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}
