//! Status command

use crate::output;
use memlens_core::{Result, Store};

pub async fn run(store: &Store) -> Result<()> {
    output::print_header("📊 Store Status");
    println!("📁 Data Directory: {}", store.path().display());

    let names = store.collection_names().await?;
    println!();
    println!("📚 Collections ({}):", names.len());

    for name in &names {
        match collection_count(store, name).await {
            Ok(count) => println!("   • {}: {} documents", name, count),
            Err(_) => println!("   • {}: (error)", name),
        }
    }
    Ok(())
}

async fn collection_count(store: &Store, name: &str) -> Result<usize> {
    store.collection(name).await?.count().await
}
