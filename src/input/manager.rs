//! Input manager for handling different file types

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{extract_text, markdown_to_text, DocumentSource};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a file into a [`DocumentSource`] without extracting it
    pub async fn load_source(&self, path: &Path) -> Result<DocumentSource> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match FileType::from_path(path) {
            FileType::Pdf => Ok(DocumentSource::Pdf(fs::read(path).await?)),
            FileType::Text => Ok(DocumentSource::Text(fs::read_to_string(path).await?)),
            FileType::Markdown => {
                let markdown = fs::read_to_string(path).await?;
                Ok(DocumentSource::Text(markdown_to_text(&markdown)))
            }
            FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        let source = self.load_source(path).await?;
        if matches!(source, DocumentSource::Pdf(_)) {
            info!("Extracting text from PDF: {}", path.display());
        } else {
            info!("Reading text file: {}", path.display());
        }

        let text = extract_text(&source).map_err(|e| match e {
            ResumeMatcherError::Extraction(msg) => {
                ResumeMatcherError::Extraction(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
