//! Read-only access to the on-disk vector store
//!
//! One `Store` per process run, from which collection handles are
//! fetched by name. All operations go through the embedded lancedb
//! client; this layer never writes.

mod collection;
mod record;

pub use collection::Collection;
pub use record::{similarity_percent, DocumentRecord, RecordMetadata, SearchHit};

use crate::error::{MemlensError, Result};
use lancedb::Connection;
use std::path::{Path, PathBuf};

/// Handle to the persistent vector store
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Default on-disk location of the vector store
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::DATA_DIR_NAME)
            .join(crate::STORE_DIR_NAME)
    }

    /// Open the store at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        let uri = path.to_str().ok_or_else(|| {
            MemlensError::InvalidInput(format!(
                "store path is not valid UTF-8: {}",
                path.display()
            ))
        })?;
        tracing::debug!("opening vector store at {}", uri);
        let conn = lancedb::connect(uri).execute().await?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Directory this store was opened at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all collections in the store
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        Ok(self.conn.table_names().execute().await?)
    }

    /// Fetch a collection by name
    ///
    /// Any failure to open the underlying table is reported as
    /// collection-not-found, with the client error kept as detail.
    pub async fn collection(&self, name: &str) -> Result<Collection> {
        match self.conn.open_table(name).execute().await {
            Ok(table) => Ok(Collection::new(name.to_string(), table)),
            Err(source) => {
                tracing::debug!("failed to open collection '{}': {}", name, source);
                Err(MemlensError::CollectionNotFound {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}
