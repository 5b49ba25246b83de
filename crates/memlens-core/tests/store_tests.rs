//! Integration tests exercising read operations against a real store

use arrow_array::{
    FixedSizeListArray, Float32Array, RecordBatch, RecordBatchIterator, StringArray,
};
use arrow_schema::{DataType, Field, Schema};
use memlens_core::{CollectionStats, MemlensError, QueryEmbedder, Result, Store, COLLECTION_NAME};
use std::sync::Arc;
use tempfile::TempDir;

const DIM: i32 = 4;

const LONG_CONTENT: &str = "The deploy failed because the migration lock was still held by a \
previous run; releasing it manually and re-running the pipeline fixed the rollout.";

fn doc_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("content", DataType::Utf8, false),
        Field::new("doc_type", DataType::Utf8, true),
        Field::new("session_id", DataType::Utf8, true),
        Field::new(
            "vector",
            DataType::FixedSizeList(Arc::new(Field::new("item", DataType::Float32, true)), DIM),
            true,
        ),
    ]))
}

fn vector_column(vectors: &[[f32; DIM as usize]]) -> FixedSizeListArray {
    let values = Float32Array::from(vectors.iter().flatten().copied().collect::<Vec<_>>());
    FixedSizeListArray::try_new(
        Arc::new(Field::new("item", DataType::Float32, true)),
        DIM,
        Arc::new(values),
        None,
    )
    .unwrap()
}

fn seed_batch() -> RecordBatch {
    let ids = StringArray::from(vec!["mem-001", "mem-002", "mem-003"]);
    let contents = StringArray::from(vec![
        "How do I rotate the API keys for staging?",
        LONG_CONTENT,
        "Summarize yesterday's deploy failures",
    ]);
    let doc_types = StringArray::from(vec![Some("prompt"), Some("response"), Some("prompt")]);
    let sessions = StringArray::from(vec![
        Some("5f2c1b7a-9d41-4c52-8f35-0f4a7b9d2e11"),
        Some("5f2c1b7a-9d41-4c52-8f35-0f4a7b9d2e11"),
        None,
    ]);
    let vectors = vector_column(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.9, 0.1, 0.0, 0.0],
    ]);

    RecordBatch::try_new(
        doc_schema(),
        vec![
            Arc::new(ids),
            Arc::new(contents),
            Arc::new(doc_types),
            Arc::new(sessions),
            Arc::new(vectors),
        ],
    )
    .unwrap()
}

async fn seed_store(dir: &TempDir) {
    let conn = lancedb::connect(dir.path().to_str().unwrap())
        .execute()
        .await
        .unwrap();
    let batch = seed_batch();
    let schema = batch.schema();
    let batches = RecordBatchIterator::new(vec![Ok(batch)], schema);
    conn.create_table(COLLECTION_NAME, Box::new(batches))
        .execute()
        .await
        .unwrap();
}

async fn seed_empty_store(dir: &TempDir) {
    let conn = lancedb::connect(dir.path().to_str().unwrap())
        .execute()
        .await
        .unwrap();
    conn.create_empty_table(COLLECTION_NAME, doc_schema())
        .execute()
        .await
        .unwrap();
}

struct StubEmbedder(Vec<f32>);

impl QueryEmbedder for StubEmbedder {
    fn embed_query(&mut self, _text: &str) -> Result<Vec<f32>> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn count_and_peek_respect_limits() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    assert_eq!(collection.count().await.unwrap(), 3);
    assert_eq!(collection.peek(10).await.unwrap().len(), 3);
    assert_eq!(collection.peek(2).await.unwrap().len(), 2);
    assert!(collection.peek(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn peek_decodes_records() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    let docs = collection.peek(10).await.unwrap();
    assert_eq!(docs[0].id, "mem-001");
    assert_eq!(docs[0].meta.doc_type(), "prompt");
    assert!(docs[0].meta.session_id().starts_with("5f2c1b7a"));
    assert_eq!(docs[1].content, LONG_CONTENT);

    // null session_id falls back to the unknown label
    assert_eq!(docs[2].meta.session_id(), "unknown");
}

#[tokio::test]
async fn store_lists_collections() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();

    let names = store.collection_names().await.unwrap();
    assert_eq!(names, vec![COLLECTION_NAME.to_string()]);
}

#[tokio::test]
async fn missing_collection_reports_not_found() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();

    let err = store.collection("other").await.unwrap_err();
    assert!(matches!(err, MemlensError::CollectionNotFound { .. }));
    assert!(err.to_string().contains("other"));
}

#[tokio::test]
async fn type_tallies_match_corpus() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    let rows = collection.scan_metadata().await.unwrap();
    let stats = CollectionStats::from_metadata(&rows);

    assert_eq!(stats.total, 3);
    assert_eq!(
        stats.by_type,
        vec![("prompt".to_string(), 2), ("response".to_string(), 1)]
    );
    let session_sum: usize = stats.by_session.iter().map(|(_, n)| n).sum();
    assert_eq!(session_sum, collection.count().await.unwrap());
}

#[tokio::test]
async fn search_orders_by_distance() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    let hits = collection.search(&[1.0, 0.0, 0.0, 0.0], 10).await.unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].doc.id, "mem-001");
    assert!(hits[0].distance <= hits[1].distance);
    assert!(hits[1].distance <= hits[2].distance);
    assert!(hits[0].similarity() >= hits[1].similarity());

    let top = collection.search(&[1.0, 0.0, 0.0, 0.0], 1).await.unwrap();
    assert_eq!(top.len(), 1);
}

#[tokio::test]
async fn search_text_goes_through_the_embedder() {
    let dir = TempDir::new().unwrap();
    seed_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    let mut embedder = StubEmbedder(vec![0.0, 1.0, 0.0, 0.0]);
    let hits = collection
        .search_text(&mut embedder, "anything", 2)
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].doc.id, "mem-002");
}

#[tokio::test]
async fn search_on_empty_collection_returns_nothing() {
    let dir = TempDir::new().unwrap();
    seed_empty_store(&dir).await;
    let store = Store::open(dir.path()).await.unwrap();
    let collection = store.collection(COLLECTION_NAME).await.unwrap();

    assert_eq!(collection.count().await.unwrap(), 0);
    assert!(collection
        .search(&[1.0, 0.0, 0.0, 0.0], 5)
        .await
        .unwrap()
        .is_empty());
    assert!(collection.peek(10).await.unwrap().is_empty());
}
