//! Document records and Arrow batch decoding

use arrow_array::{Array, Float32Array, RecordBatch, StringArray};

/// Metadata fields attached to a stored document
#[derive(Debug, Clone, Default)]
pub struct RecordMetadata {
    doc_type: Option<String>,
    session_id: Option<String>,
}

impl RecordMetadata {
    pub fn new(doc_type: Option<String>, session_id: Option<String>) -> Self {
        Self {
            doc_type,
            session_id,
        }
    }

    /// Document type, absent values reported as `unknown`
    pub fn doc_type(&self) -> &str {
        self.doc_type.as_deref().unwrap_or(crate::UNKNOWN_LABEL)
    }

    /// Recording session id, absent values reported as `unknown`
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(crate::UNKNOWN_LABEL)
    }
}

/// One stored document, minus its embedding vector
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub id: String,
    pub content: String,
    pub meta: RecordMetadata,
}

/// One nearest-neighbour result
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub doc: DocumentRecord,
    /// Cosine distance in [0, 2]
    pub distance: f32,
}

impl SearchHit {
    /// Distance mapped to a similarity percentage
    pub fn similarity(&self) -> f32 {
        similarity_percent(self.distance)
    }
}

/// Convert a cosine distance in [0, 2] to a similarity percentage,
/// clamped so it never goes negative
pub fn similarity_percent(distance: f32) -> f32 {
    (1.0 - distance / 2.0).max(0.0) * 100.0
}

pub(crate) fn decode_documents(batch: &RecordBatch, out: &mut Vec<DocumentRecord>) {
    for row in 0..batch.num_rows() {
        out.push(document_at(batch, row));
    }
}

pub(crate) fn decode_metadata(batch: &RecordBatch, out: &mut Vec<RecordMetadata>) {
    for row in 0..batch.num_rows() {
        out.push(metadata_at(batch, row));
    }
}

pub(crate) fn decode_hits(batch: &RecordBatch, out: &mut Vec<SearchHit>) {
    for row in 0..batch.num_rows() {
        // a missing distance column reads as maximally dissimilar
        let distance = f32_at(batch, "_distance", row).unwrap_or(2.0);
        out.push(SearchHit {
            doc: document_at(batch, row),
            distance,
        });
    }
}

fn document_at(batch: &RecordBatch, row: usize) -> DocumentRecord {
    DocumentRecord {
        id: string_at(batch, "id", row).unwrap_or_default(),
        content: string_at(batch, "content", row).unwrap_or_default(),
        meta: metadata_at(batch, row),
    }
}

fn metadata_at(batch: &RecordBatch, row: usize) -> RecordMetadata {
    RecordMetadata::new(
        string_at(batch, "doc_type", row),
        string_at(batch, "session_id", row),
    )
}

fn string_at(batch: &RecordBatch, column: &str, row: usize) -> Option<String> {
    let array = batch
        .column_by_name(column)?
        .as_any()
        .downcast_ref::<StringArray>()?;
    array.is_valid(row).then(|| array.value(row).to_string())
}

fn f32_at(batch: &RecordBatch, column: &str, row: usize) -> Option<f32> {
    let array = batch
        .column_by_name(column)?
        .as_any()
        .downcast_ref::<Float32Array>()?;
    array.is_valid(row).then(|| array.value(row))
}
