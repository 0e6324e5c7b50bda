//! Sentence embeddings behind a replaceable provider

use crate::error::{Result, ResumeMatcherError};

/// Anything that turns strings into fixed-length vectors.
///
/// The scorer always sends one batch of two texts (resume, job description)
/// and expects two vectors of equal length back.
pub trait EmbeddingProvider: Send + Sync {
    fn name(&self) -> &str;

    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Cosine similarity between two embeddings; zero vectors score 0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeMatcherError::Processing(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

#[cfg(feature = "embeddings")]
pub use model2vec::Model2VecProvider;

#[cfg(feature = "embeddings")]
mod model2vec {
    use super::EmbeddingProvider;
    use crate::error::{Result, ResumeMatcherError};
    use anyhow::Context;
    use log::{info, warn};
    use model2vec_rs::model::StaticModel;
    use once_cell::sync::OnceCell;
    use std::path::PathBuf;
    use std::time::Instant;

    /// Model2Vec static embeddings, loaded on first use.
    ///
    /// Loading happens at most once per provider even under concurrent
    /// callers; a failed load is kept so later calls fail fast.
    pub struct Model2VecProvider {
        location: PathBuf,
        name: String,
        model: OnceCell<std::result::Result<StaticModel, String>>,
    }

    impl Model2VecProvider {
        /// `location` is a local model directory or a HuggingFace repo id
        pub fn new(location: impl Into<PathBuf>) -> Self {
            let location = location.into();
            let name = location.to_string_lossy().to_string();
            Self {
                location,
                name,
                model: OnceCell::new(),
            }
        }

        fn model(&self) -> Result<&StaticModel> {
            let loaded = self.model.get_or_init(|| {
                let start_time = Instant::now();
                info!("Loading Model2Vec embedding model from: {}", self.name);

                let loaded = StaticModel::from_pretrained(&self.location, None, None, None)
                    .with_context(|| format!("failed to load Model2Vec model '{}'", self.name));

                match loaded {
                    Ok(model) => {
                        info!("Model loaded successfully in {:.2?}", start_time.elapsed());
                        Ok(model)
                    }
                    Err(e) => {
                        warn!("{:#}", e);
                        Err(format!("{:#}", e))
                    }
                }
            });

            loaded
                .as_ref()
                .map_err(|e| ResumeMatcherError::ProviderUnavailable(e.clone()))
        }
    }

    impl EmbeddingProvider for Model2VecProvider {
        fn name(&self) -> &str {
            &self.name
        }

        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(self.model()?.encode(texts))
        }
    }
}
