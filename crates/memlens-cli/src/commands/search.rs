//! Search command

use crate::commands::memory_collection;
use crate::output;
use memlens_core::{FastembedEmbedder, Result, Store};

const PREVIEW_CHARS: usize = 100;

pub async fn run(store: &Store, query: &str, limit: usize) -> Result<()> {
    // fetch the collection first: a missing collection must not trigger
    // a model download
    let collection = memory_collection(store).await?;

    output::print_header(&format!("🔍 Search: \"{}\"", query));

    let mut embedder = FastembedEmbedder::load(&FastembedEmbedder::default_cache_dir())?;
    let hits = collection.search_text(&mut embedder, query, limit).await?;

    if hits.is_empty() {
        println!("   (no results)");
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        let doc_type = hit.doc.meta.doc_type();
        println!();
        println!(
            "{} [{}] {:.1}% match",
            output::type_emoji(doc_type),
            i + 1,
            hit.similarity()
        );
        println!("   ID: {}", hit.doc.id);
        println!("   Type: {}", doc_type);
        println!(
            "   Content: {}",
            output::preview(&hit.doc.content, PREVIEW_CHARS)
        );
    }
    Ok(())
}
