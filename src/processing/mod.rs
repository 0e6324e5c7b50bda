//! Text analysis pipeline

pub mod document;
pub mod catalog;
pub mod skills;
pub mod embeddings;
pub mod scoring;
pub mod heuristics;
pub mod roles;
pub mod analyzer;

pub use analyzer::{AnalysisEngine, AnalysisResult, MatchVerdict};
pub use catalog::{ReferenceData, RoleProfiles, SkillCatalog, StopWords};
pub use document::{Document, DocumentType};
pub use scoring::ScoringStrategy;
pub use skills::SkillSet;
