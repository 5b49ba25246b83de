//! Per-collection statistics

use crate::store::RecordMetadata;
use std::collections::HashMap;

/// Tallies derived from one metadata scan, discarded after printing
#[derive(Debug, Clone, serde::Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub by_type: Vec<(String, usize)>,
    pub by_session: Vec<(String, usize)>,
}

impl CollectionStats {
    /// Tally metadata rows by document type and by session
    pub fn from_metadata(rows: &[RecordMetadata]) -> Self {
        let mut type_counts: HashMap<String, usize> = HashMap::new();
        let mut session_counts: HashMap<String, usize> = HashMap::new();

        for row in rows {
            *type_counts.entry(row.doc_type().to_string()).or_default() += 1;
            *session_counts
                .entry(row.session_id().to_string())
                .or_default() += 1;
        }

        CollectionStats {
            total: rows.len(),
            by_type: sorted_desc(type_counts),
            by_session: sorted_desc(session_counts),
        }
    }
}

/// Descending by count, ties broken by label for stable output
fn sorted_desc(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
