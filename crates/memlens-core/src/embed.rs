//! Query embedding
//!
//! Semantic search embeds query text locally with the same MiniLM model
//! family the store's documents were embedded with. Model files are
//! cached on disk and downloaded by the embedding library on first use.

use crate::error::{MemlensError, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::{Path, PathBuf};

/// Turns query text into a query vector
pub trait QueryEmbedder {
    fn embed_query(&mut self, text: &str) -> Result<Vec<f32>>;
}

/// Local fastembed-backed query embedder (MiniLM-L6-v2, 384 dims)
pub struct FastembedEmbedder {
    model: TextEmbedding,
}

impl FastembedEmbedder {
    /// Default model cache location
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::DATA_DIR_NAME)
            .join(crate::MODEL_CACHE_DIR_NAME)
    }

    /// Load the query model, fetching it into `cache_dir` on first use
    pub fn load(cache_dir: &Path) -> Result<Self> {
        tracing::debug!(
            "loading query embedding model, cache at {}",
            cache_dir.display()
        );
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir.to_path_buf())
                .with_show_download_progress(false),
        )
        .map_err(|e| MemlensError::Embedding(e.to_string()))?;
        Ok(Self { model })
    }
}

impl QueryEmbedder for FastembedEmbedder {
    fn embed_query(&mut self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self
            .model
            .embed(vec![text.to_string()], None)
            .map_err(|e| MemlensError::Embedding(e.to_string()))?;
        embeddings
            .pop()
            .ok_or_else(|| MemlensError::Embedding("model returned no embedding".to_string()))
    }
}
