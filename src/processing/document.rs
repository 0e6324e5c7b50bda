//! Document structures and normalization

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    JobDescription,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "resume"),
            DocumentType::JobDescription => write!(f, "job description"),
        }
    }
}

/// One side of an analysis. Raw text keeps its casing for display; matching
/// works on `normalized` and folds case itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub raw: String,
    pub normalized: String,
    pub document_type: DocumentType,
}

impl Document {
    pub fn new(raw: impl Into<String>, document_type: DocumentType) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self {
            raw,
            normalized,
            document_type,
        }
    }

    pub fn resume(raw: impl Into<String>) -> Self {
        Self::new(raw, DocumentType::Resume)
    }

    pub fn job_description(raw: impl Into<String>) -> Self {
        Self::new(raw, DocumentType::JobDescription)
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.normalized.split(' ').filter(|w| !w.is_empty()).count()
    }
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
