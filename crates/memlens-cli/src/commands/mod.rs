//! Command handlers

pub mod list;
pub mod search;
pub mod status;
pub mod types;

use memlens_core::{Collection, Result, Store, COLLECTION_NAME};

/// Fetch the memory collection every inspection command operates on
pub(crate) async fn memory_collection(store: &Store) -> Result<Collection> {
    store.collection(COLLECTION_NAME).await
}
