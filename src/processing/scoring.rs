//! Match scoring between a resume and a job description

use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::embeddings::{cosine_similarity, EmbeddingProvider};
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// How the match score is computed, fixed when the engine is built.
#[derive(Clone)]
pub enum ScoringStrategy {
    /// Cosine similarity of sentence embeddings, lexical when the provider fails
    Embedding(Arc<dyn EmbeddingProvider>),
    /// Share of the job description's vocabulary found in the resume
    Lexical,
}

impl std::fmt::Debug for ScoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringStrategy::Embedding(provider) => {
                f.debug_tuple("Embedding").field(&provider.name()).finish()
            }
            ScoringStrategy::Lexical => write!(f, "Lexical"),
        }
    }
}

impl ScoringStrategy {
    pub fn from_config(config: &Config) -> Self {
        if !config.models.enable_embeddings {
            debug!("Embeddings disabled in configuration, using lexical scoring");
            return ScoringStrategy::Lexical;
        }
        Self::embedding_from_config(config)
    }

    #[cfg(feature = "embeddings")]
    fn embedding_from_config(config: &Config) -> Self {
        use crate::processing::embeddings::Model2VecProvider;

        let provider = Model2VecProvider::new(config.embedding_model_location());
        ScoringStrategy::Embedding(Arc::new(provider))
    }

    #[cfg(not(feature = "embeddings"))]
    fn embedding_from_config(_config: &Config) -> Self {
        warn!("Built without the `embeddings` feature, using lexical scoring");
        ScoringStrategy::Lexical
    }

    pub fn label(&self) -> String {
        match self {
            ScoringStrategy::Embedding(provider) => format!("embedding ({})", provider.name()),
            ScoringStrategy::Lexical => "lexical overlap".to_string(),
        }
    }

    /// Score in [0, 100], rounded to two decimals. Never fails: provider
    /// errors are logged and answered with the lexical score.
    pub fn score(&self, resume_text: &str, job_text: &str) -> f64 {
        if job_text.trim().is_empty() {
            return 0.0;
        }

        match self {
            ScoringStrategy::Lexical => lexical_score(resume_text, job_text),
            ScoringStrategy::Embedding(provider) => {
                match embedding_score(provider.as_ref(), resume_text, job_text) {
                    Ok(score) => score,
                    Err(e) => {
                        warn!("Embedding scoring failed, falling back to lexical: {}", e);
                        lexical_score(resume_text, job_text)
                    }
                }
            }
        }
    }
}

pub fn embedding_score(
    provider: &dyn EmbeddingProvider,
    resume_text: &str,
    job_text: &str,
) -> Result<f64> {
    let embeddings = provider.embed(&[resume_text.to_string(), job_text.to_string()])?;

    let [resume_embedding, job_embedding] = embeddings.as_slice() else {
        return Err(ResumeMatcherError::ProviderUnavailable(format!(
            "expected 2 embeddings, got {}",
            embeddings.len()
        )));
    };

    let similarity = cosine_similarity(resume_embedding, job_embedding)?;
    if !similarity.is_finite() {
        return Err(ResumeMatcherError::ProviderUnavailable(
            "embedding similarity is not a finite number".to_string(),
        ));
    }

    Ok(round2(f64::from(similarity).clamp(0.0, 1.0) * 100.0))
}

/// |resume words ∩ job words| / |job words| as a percentage.
///
/// The denominator is the job description's vocabulary only: the score
/// answers how much of the job's wording the resume covers.
pub fn lexical_score(resume_text: &str, job_text: &str) -> f64 {
    let resume_words = word_set(resume_text);
    let job_words = word_set(job_text);

    if job_words.is_empty() {
        return 0.0;
    }

    let shared = job_words.intersection(&resume_words).count();
    round2(shared as f64 / job_words.len() as f64 * 100.0)
}

fn word_set(text: &str) -> HashSet<String> {
    text.unicode_words().map(str::to_lowercase).collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
