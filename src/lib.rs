//! Resume matcher library: skill gaps, match scoring and ATS checks for a
//! resume measured against a job description

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use processing::{AnalysisEngine, AnalysisResult, Document, ScoringStrategy};
