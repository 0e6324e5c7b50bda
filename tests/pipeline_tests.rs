//! End-to-end tests for the analysis pipeline

use resume_matcher::config::Config;
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::processing::embeddings::EmbeddingProvider;
use resume_matcher::processing::heuristics::{
    CHECK_CONTACT, CHECK_EDUCATION, CHECK_EXPERIENCE, CHECK_SKILLS,
};
use resume_matcher::processing::{
    AnalysisEngine, Document, MatchVerdict, ReferenceData, ScoringStrategy,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn lexical_engine() -> AnalysisEngine {
    AnalysisEngine::new(
        ReferenceData::default(),
        ScoringStrategy::Lexical,
        Config::default().analysis,
    )
    .unwrap()
}

struct ConstantProvider(Vec<Vec<f32>>);

impl EmbeddingProvider for ConstantProvider {
    fn name(&self) -> &str {
        "constant"
    }

    fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.0.clone())
    }
}

struct OfflineProvider;

impl EmbeddingProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(ResumeMatcherError::ProviderUnavailable("no model".to_string()))
    }
}

#[test]
fn test_python_developer_example() {
    let result = lexical_engine()
        .analyze(
            &Document::resume("Python developer with 2 years experience in Flask and SQL"),
            &Document::job_description("Looking for Python developer, 3+ years, SQL, Docker required"),
        )
        .unwrap();

    assert!(result.matched_skills.contains("Python"));
    assert!(result.matched_skills.contains("SQL"));
    assert!(result.missing_skills.contains("Docker"));
    assert_eq!(result.experience_gap, 1);
    assert!(result.match_score > 0.0 && result.match_score <= 100.0);
}

#[tokio::test]
async fn test_fixture_files_end_to_end() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let result = lexical_engine()
        .analyze(&Document::resume(resume), &Document::job_description(job))
        .unwrap();

    for skill in ["React", "TypeScript", "Node.js", "Docker"] {
        assert!(result.matched_skills.contains(skill), "{} should match", skill);
    }
    assert!(result.missing_skills.contains("AWS"));
    assert!(result.missing_skills.contains("CI/CD"));
    assert!(!result.resume_skills.contains("SQL"));
    assert!(!result.resume_skills.contains("Java"));

    assert_eq!(result.resume_years, 4);
    assert_eq!(result.job_years, 5);
    assert_eq!(result.experience_gap, 1);

    assert_eq!(result.ats.percentage, 100.0);
    for check in [CHECK_CONTACT, CHECK_EDUCATION, CHECK_EXPERIENCE, CHECK_SKILLS] {
        assert_eq!(result.ats.get(check), Some(true));
    }
}

#[test]
fn test_identical_documents_score_full_marks() {
    let text = "Data scientist skilled in Python, SQL and Pandas";
    let result = lexical_engine()
        .analyze(&Document::resume(text), &Document::job_description(text))
        .unwrap();

    assert_eq!(result.match_score, 100.0);
    assert_eq!(result.verdict, MatchVerdict::Great);
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.predicted_role, "Data Scientist");
}

#[test]
fn test_unrelated_documents() {
    let result = lexical_engine()
        .analyze(
            &Document::resume("Pastry chef"),
            &Document::job_description("Kubernetes administrator"),
        )
        .unwrap();

    assert_eq!(result.match_score, 0.0);
    assert_eq!(result.verdict, MatchVerdict::Low);
    assert_eq!(result.predicted_role, "General Professional");
    assert!(result.matched_skills.is_empty());
    assert!(result.missing_skills.contains("Kubernetes"));
}

#[test]
fn test_embedding_strategy_uses_provider() {
    let provider = Arc::new(ConstantProvider(vec![vec![1.0, 0.0], vec![1.0, 0.0]]));
    let engine = lexical_engine().with_strategy(ScoringStrategy::Embedding(provider));

    let result = engine
        .analyze(&Document::resume("chef"), &Document::job_description("Rust engineer"))
        .unwrap();
    assert_eq!(result.match_score, 100.0);
    assert_eq!(engine.strategy().label(), "embedding (constant)");
}

#[test]
fn test_unavailable_provider_falls_back_to_lexical() {
    let engine = lexical_engine().with_strategy(ScoringStrategy::Embedding(Arc::new(OfflineProvider)));

    let result = engine
        .analyze(&Document::resume("a"), &Document::job_description("a b"))
        .unwrap();
    assert_eq!(result.match_score, 50.0);
}

#[test]
fn test_blank_resume_is_missing_input() {
    let err = lexical_engine()
        .analyze(&Document::resume(""), &Document::job_description("Python"))
        .unwrap_err();
    assert!(matches!(err, ResumeMatcherError::MissingInput(_)));
}

#[test]
fn test_reference_data_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let reference_path = temp_dir.path().join("reference.toml");
    std::fs::write(
        &reference_path,
        r#"
[[categories]]
name = "Systems"
skills = ["Rust", "Zig", "eBPF"]

[[roles]]
name = "Systems Programmer"
skills = ["Rust", "Zig"]
"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.models.enable_embeddings = false;
    config.analysis.reference_data = Some(reference_path);

    let engine = AnalysisEngine::from_config(&config).unwrap();
    let result = engine
        .analyze(
            &Document::resume("Rust and Python"),
            &Document::job_description("Rust, eBPF"),
        )
        .unwrap();

    assert_eq!(result.resume_skills.iter().collect::<Vec<_>>(), vec!["Rust"]);
    assert!(result.missing_skills.contains("eBPF"));
    assert_eq!(result.predicted_role, "Systems Programmer");
}

#[test]
fn test_missing_reference_file_fails_engine_construction() {
    let mut config = Config::default();
    config.models.enable_embeddings = false;
    config.analysis.reference_data = Some("/nonexistent/reference.toml".into());

    assert!(AnalysisEngine::from_config(&config).is_err());
}
