//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memlens")]
#[command(version, about = "Inspect the local memlens vector store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show store status and per-collection document counts
    Status,

    /// List sample documents
    List {
        /// Number of documents to show
        #[arg(default_value_t = 10)]
        limit: usize,
    },

    /// Semantic similarity search
    Search {
        /// Search query
        query: String,

        /// Number of results
        #[arg(default_value_t = 10)]
        limit: usize,
    },

    /// Document type and session statistics
    Types,
}
