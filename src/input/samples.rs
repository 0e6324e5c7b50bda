//! Bundled demo data: a sample resume and a sample job description

use crate::config::SampleConfig;
use crate::error::{Result, ResumeMatcherError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub resume: String,
    pub job_description: String,
}

/// Both files must be present; the first missing one is reported.
pub async fn load_samples(config: &SampleConfig) -> Result<SampleData> {
    let resume = read_sample(&config.dir.join(&config.resume_file)).await?;
    let job_description = read_sample(&config.dir.join(&config.job_file)).await?;

    Ok(SampleData {
        resume,
        job_description,
    })
}

async fn read_sample(path: &Path) -> Result<String> {
    match fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ResumeMatcherError::SampleDataMissing(path.to_path_buf()))
        }
        Err(e) => Err(ResumeMatcherError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(dir: &Path) -> SampleConfig {
        SampleConfig {
            dir: dir.to_path_buf(),
            job_file: "dummy_jd.txt".to_string(),
            resume_file: "sample_resume_content.txt".to_string(),
        }
    }

    #[tokio::test]
    async fn test_loads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dummy_jd.txt"), "Need Python").unwrap();
        std::fs::write(dir.path().join("sample_resume_content.txt"), "Python dev").unwrap();

        let samples = load_samples(&sample_config(dir.path())).await.unwrap();
        assert_eq!(samples.job_description, "Need Python");
        assert_eq!(samples.resume, "Python dev");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sample_resume_content.txt"), "Python dev").unwrap();

        let err = load_samples(&sample_config(dir.path())).await.unwrap_err();
        match err {
            ResumeMatcherError::SampleDataMissing(path) => {
                assert!(path.ends_with("dummy_jd.txt"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
