//! Integration tests for document ingestion and sample data

use resume_matcher::config::SampleConfig;
use resume_matcher::error::ResumeMatcherError;
use resume_matcher::input::samples::load_samples;
use resume_matcher::input::{DocumentSource, InputManager};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResumeMatcherError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResumeMatcherError::InvalidInput(_)));
}

#[tokio::test]
async fn test_malformed_pdf_is_an_extraction_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    let manager = InputManager::new();
    let source = manager.load_source(&path).await.unwrap();
    assert!(matches!(source, DocumentSource::Pdf(_)));

    let mut manager = InputManager::new();
    let err = manager.extract_text(&path).await.unwrap_err();
    match err {
        ResumeMatcherError::Extraction(msg) => assert!(msg.contains("broken.pdf")),
        other => panic!("expected extraction error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_file_without_extension_is_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("RESUME");
    std::fs::write(&path, "Rust engineer").unwrap();

    let mut manager = InputManager::new();
    assert_eq!(manager.extract_text(&path).await.unwrap(), "Rust engineer");
}

#[tokio::test]
async fn test_bundled_samples_load() {
    let config = SampleConfig {
        dir: PathBuf::from("samples"),
        job_file: "dummy_jd.txt".to_string(),
        resume_file: "sample_resume_content.txt".to_string(),
    };

    let samples = load_samples(&config).await.unwrap();
    assert!(samples.resume.contains("Jane Smith"));
    assert!(samples.job_description.contains("Data Scientist"));
}

#[tokio::test]
async fn test_missing_samples_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = SampleConfig {
        dir: temp_dir.path().to_path_buf(),
        job_file: "dummy_jd.txt".to_string(),
        resume_file: "sample_resume_content.txt".to_string(),
    };

    let err = load_samples(&config).await.unwrap_err();
    match err {
        ResumeMatcherError::SampleDataMissing(path) => {
            assert!(path.ends_with("sample_resume_content.txt"))
        }
        other => panic!("expected missing sample data, got {:?}", other),
    }
}
