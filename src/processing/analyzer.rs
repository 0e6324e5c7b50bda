//! Analysis engine: runs the whole pipeline over a resume and a job description

use crate::config::{AnalysisConfig, Config};
use crate::error::{Result, ResumeMatcherError};
use crate::input::text_extractor::{extract_text, DocumentSource};
use crate::processing::catalog::ReferenceData;
use crate::processing::document::{Document, DocumentType};
use crate::processing::heuristics::{
    ats_checklist, experience_gap, extract_years_experience, keyword_frequency, AtsChecklist,
    KeywordCount,
};
use crate::processing::roles::predict_role;
use crate::processing::scoring::ScoringStrategy;
use crate::processing::skills::{suggest_near_misses, NearMiss, SkillMatcher, SkillSet};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates the pipeline steps over immutable reference data
pub struct AnalysisEngine {
    reference: ReferenceData,
    matcher: SkillMatcher,
    strategy: ScoringStrategy,
    settings: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0 to 100, two decimals
    pub match_score: f64,
    pub verdict: MatchVerdict,

    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub skill_suggestions: Vec<NearMiss>,

    pub predicted_role: String,
    pub ats: AtsChecklist,

    pub resume_keywords: Vec<KeywordCount>,
    pub job_keywords: Vec<KeywordCount>,

    pub resume_years: u32,
    pub job_years: u32,
    pub experience_gap: u32,

    /// Whitespace-normalized resume text the analysis ran on
    pub resume_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Great,
    Good,
    Low,
}

impl MatchVerdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchVerdict::Great
        } else if score >= 60.0 {
            MatchVerdict::Good
        } else {
            MatchVerdict::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MatchVerdict::Great => "Great Match!",
            MatchVerdict::Good => "Good, but improvements needed.",
            MatchVerdict::Low => "Low match score.",
        }
    }
}

impl AnalysisEngine {
    pub fn new(
        reference: ReferenceData,
        strategy: ScoringStrategy,
        settings: AnalysisConfig,
    ) -> Result<Self> {
        let matcher = SkillMatcher::new(&reference.catalog)?;
        debug!(
            "Analysis engine ready: {} skills, {} roles, {} scoring",
            matcher.skill_count(),
            reference.roles.len(),
            strategy.label()
        );

        Ok(Self {
            reference,
            matcher,
            strategy,
            settings,
        })
    }

    /// Reference data from the configured file (or the built-in defaults)
    /// and the scoring strategy the configuration selects.
    pub fn from_config(config: &Config) -> Result<Self> {
        let reference = match &config.analysis.reference_data {
            Some(path) => {
                info!("Loading reference data from: {}", path.display());
                ReferenceData::load(path)?
            }
            None => ReferenceData::default(),
        };

        Self::new(
            reference,
            ScoringStrategy::from_config(config),
            config.analysis.clone(),
        )
    }

    pub fn with_strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> &ScoringStrategy {
        &self.strategy
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn extract_skills(&self, text: &str) -> SkillSet {
        self.matcher.extract(text)
    }

    /// Ingest a resume source (text or PDF) and analyze it against `job_text`
    pub fn analyze_sources(&self, resume: &DocumentSource, job_text: &str) -> Result<AnalysisResult> {
        let resume_text = extract_text(resume)?;
        self.analyze(
            &Document::new(resume_text, DocumentType::Resume),
            &Document::new(job_text, DocumentType::JobDescription),
        )
    }

    /// Both documents must contain text; nothing is computed otherwise.
    pub fn analyze(&self, resume: &Document, job: &Document) -> Result<AnalysisResult> {
        if resume.is_blank() {
            return Err(ResumeMatcherError::MissingInput(
                "the resume contains no text".to_string(),
            ));
        }
        if job.is_blank() {
            return Err(ResumeMatcherError::MissingInput(
                "the job description contains no text".to_string(),
            ));
        }

        let start_time = Instant::now();
        debug!(
            "Analyzing resume ({} words) against job description ({} words)",
            resume.word_count(),
            job.word_count()
        );

        let match_score = self.strategy.score(&resume.normalized, &job.normalized);

        let resume_skills = self.matcher.extract(&resume.normalized);
        let job_skills = self.matcher.extract(&job.normalized);
        let matched_skills = resume_skills.intersection(&job_skills);
        let missing_skills = job_skills.difference(&resume_skills);
        let skill_suggestions =
            suggest_near_misses(&missing_skills, &resume.normalized, self.settings.fuzzy_threshold);

        let resume_years = extract_years_experience(&resume.raw);
        let job_years = extract_years_experience(&job.raw);

        let predicted_role = predict_role(&resume_skills, &self.reference.roles);
        let ats = ats_checklist(&resume.raw, &resume_skills);

        let resume_keywords = keyword_frequency(
            &resume.raw,
            &self.reference.stop_words,
            self.settings.keyword_min_length,
            self.settings.keyword_top_n,
        );
        let job_keywords = keyword_frequency(
            &job.raw,
            &self.reference.stop_words,
            self.settings.keyword_min_length,
            self.settings.keyword_top_n,
        );

        info!(
            "Analysis finished in {:.2?}: score {:.2}, {} matched, {} missing",
            start_time.elapsed(),
            match_score,
            matched_skills.len(),
            missing_skills.len()
        );

        Ok(AnalysisResult {
            match_score,
            verdict: MatchVerdict::from_score(match_score),
            resume_skills,
            job_skills,
            matched_skills,
            missing_skills,
            skill_suggestions,
            predicted_role,
            ats,
            resume_keywords,
            job_keywords,
            resume_years,
            job_years,
            experience_gap: experience_gap(job_years, resume_years),
            resume_text: resume.normalized.clone(),
        })
    }
}
