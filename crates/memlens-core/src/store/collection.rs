//! Collection handle and its read operations

use crate::embed::QueryEmbedder;
use crate::error::Result;
use crate::store::record::{self, DocumentRecord, RecordMetadata, SearchHit};
use futures::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::{DistanceType, Table};

/// Handle to one collection (a table in the vector store)
pub struct Collection {
    name: String,
    table: Table,
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Collection {
    pub(crate) fn new(name: String, table: Table) -> Self {
        Self { name, table }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of documents
    pub async fn count(&self) -> Result<usize> {
        Ok(self.table.count_rows(None).await?)
    }

    /// Up to `limit` documents in store-defined order
    pub async fn peek(&self, limit: usize) -> Result<Vec<DocumentRecord>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut stream = self.table.query().limit(limit).execute().await?;
        let mut docs = Vec::new();
        while let Some(batch) = stream.try_next().await? {
            record::decode_documents(&batch, &mut docs);
        }
        Ok(docs)
    }

    /// Metadata of every document in the collection
    pub async fn scan_metadata(&self) -> Result<Vec<RecordMetadata>> {
        let mut stream = self.table.query().execute().await?;
        let mut rows = Vec::new();
        while let Some(batch) = stream.try_next().await? {
            record::decode_metadata(&batch, &mut rows);
        }
        Ok(rows)
    }

    /// Nearest neighbours of `vector` by cosine distance, closest first
    pub async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut stream = self
            .table
            .query()
            .nearest_to(vector)?
            .distance_type(DistanceType::Cosine)
            .limit(limit)
            .execute()
            .await?;
        let mut hits = Vec::new();
        while let Some(batch) = stream.try_next().await? {
            record::decode_hits(&batch, &mut hits);
        }
        Ok(hits)
    }

    /// Embed `query` and run a nearest-neighbour search
    pub async fn search_text(
        &self,
        embedder: &mut dyn QueryEmbedder,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>> {
        let vector = embedder.embed_query(query)?;
        self.search(&vector, limit).await
    }
}
