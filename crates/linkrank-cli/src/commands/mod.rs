//! CLI command handlers

pub mod compare;
pub mod links;
pub mod rank;

use anyhow::{Context, Result};
use linkrank_core::Corpus;
use std::path::Path;

/// Load a corpus from a directory of pages or a JSON adjacency file
fn load_corpus(path: &Path) -> Result<Corpus> {
    let corpus =
        Corpus::load(path).with_context(|| format!("loading corpus {}", path.display()))?;
    tracing::info!(
        "Loaded {} pages with {} links from {}",
        corpus.len(),
        corpus.link_count(),
        path.display()
    );
    Ok(corpus)
}
