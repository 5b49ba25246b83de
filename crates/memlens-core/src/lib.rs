//! Memlens Core Library
//!
//! Store access layer for the memlens vector-store inspector:
//! - Read-only wrapper over the embedded lancedb client
//! - Arrow record decoding into document records
//! - Per-collection type/session tallies
//! - Local query embedder for semantic search

pub mod embed;
pub mod error;
pub mod stats;
pub mod store;

pub use embed::{FastembedEmbedder, QueryEmbedder};
pub use error::{Error, MemlensError, Result};
pub use stats::CollectionStats;
pub use store::{similarity_percent, Collection, DocumentRecord, RecordMetadata, SearchHit, Store};

/// Directory under the user's home holding all memlens data
pub const DATA_DIR_NAME: &str = ".memlens";

/// Vector store directory inside the data directory
pub const STORE_DIR_NAME: &str = "vector-db";

/// Embedding model cache inside the data directory
pub const MODEL_CACHE_DIR_NAME: &str = "models";

/// Collection holding the memory corpus
pub const COLLECTION_NAME: &str = "memlens_memory";

/// Label substituted for absent metadata fields
pub const UNKNOWN_LABEL: &str = "unknown";
