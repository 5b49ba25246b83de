//! Types command

use crate::commands::memory_collection;
use crate::output;
use memlens_core::{CollectionStats, Result, Store};

const TOP_SESSIONS: usize = 5;

pub async fn run(store: &Store) -> Result<()> {
    let collection = memory_collection(store).await?;

    let count = collection.count().await?;

    output::print_header("📈 Document Types Statistics");

    if count == 0 {
        println!("   (no documents)");
        return Ok(());
    }

    let rows = collection.scan_metadata().await?;
    let stats = CollectionStats::from_metadata(&rows);

    println!();
    println!("📊 By Type (Total: {}):", count);
    for (doc_type, n) in &stats.by_type {
        println!("   {} {}: {}", output::type_emoji(doc_type), doc_type, n);
    }

    println!();
    println!("📊 By Session (Top {}):", TOP_SESSIONS);
    for (session_id, n) in stats.by_session.iter().take(TOP_SESSIONS) {
        println!(
            "   📁 {}: {} documents",
            output::session_label(session_id),
            n
        );
    }
    Ok(())
}
