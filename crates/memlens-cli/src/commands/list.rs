//! List command

use crate::commands::memory_collection;
use crate::output;
use memlens_core::{Result, Store};

const PREVIEW_CHARS: usize = 80;

pub async fn run(store: &Store, limit: usize) -> Result<()> {
    let collection = memory_collection(store).await?;

    let count = collection.count().await?;
    let limit = limit.min(count);

    output::print_header(&format!("📄 Documents (showing {} of {})", limit, count));

    if count == 0 {
        println!("   (no documents)");
        return Ok(());
    }

    let docs = collection.peek(limit).await?;
    for (i, doc) in docs.iter().enumerate() {
        let doc_type = doc.meta.doc_type();
        println!();
        println!("{} [{}] {}", output::type_emoji(doc_type), i + 1, doc.id);
        println!(
            "   Type: {} | Session: {}...",
            doc_type,
            output::short_session(doc.meta.session_id())
        );
        println!("   Content: {}", output::preview(&doc.content, PREVIEW_CHARS));
    }
    Ok(())
}
