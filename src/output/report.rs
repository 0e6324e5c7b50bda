//! Report structures handed to the formatters

use crate::processing::analyzer::AnalysisResult;
use crate::processing::heuristics::AtsChecklist;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis result together with how and from what it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// Strategy label, e.g. "lexical overlap"
    pub scoring_method: String,

    /// File path, or a short description for inline text
    pub resume_source: String,
    pub job_source: String,

    pub version: String,
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        scoring_method: impl Into<String>,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
    ) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scoring_method: scoring_method.into(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Matched skills followed by a passing ATS summary when there is one
    pub fn strong_areas(&self) -> Vec<String> {
        let mut areas: Vec<String> = self.result.matched_skills.iter().cloned().collect();
        if self.result.ats.percentage >= 75.0 {
            areas.push(format!("ATS-friendly layout ({}%)", self.result.ats.percentage));
        }
        areas
    }

    /// Short, ordered improvement hints derived from the result
    pub fn improvement_areas(&self) -> Vec<String> {
        let result = &self.result;
        let mut areas = Vec::new();

        if !result.missing_skills.is_empty() {
            let missing: Vec<&str> = result.missing_skills.iter().map(String::as_str).collect();
            areas.push(format!("Add evidence of: {}", missing.join(", ")));
        }

        for suggestion in &result.skill_suggestions {
            areas.push(format!(
                "Write \"{}\" as \"{}\" so keyword filters recognise it",
                suggestion.found, suggestion.skill
            ));
        }

        if result.experience_gap > 0 {
            areas.push(format!(
                "Job asks for {} more year(s) of experience than the resume states",
                result.experience_gap
            ));
        }

        for name in failed_checks(&result.ats) {
            areas.push(format!("Add a clear {}", name.to_lowercase()));
        }

        areas
    }
}

fn failed_checks(ats: &AtsChecklist) -> impl Iterator<Item = &str> {
    ats.checks
        .iter()
        .filter(|check| !check.passed)
        .map(|check| check.name.as_str())
}
