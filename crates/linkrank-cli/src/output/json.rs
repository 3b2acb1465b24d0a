//! JSON output formatter

use anyhow::Result;
use linkrank_core::{Comparison, Corpus, RankResult};

pub fn format_results(results: &[RankResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)? + "\n")
}

pub fn format_comparison(comparison: &Comparison, tolerance: f64) -> Result<String> {
    let output = serde_json::json!({
        "left": comparison.left,
        "right": comparison.right,
        "max_abs_diff": comparison.max_abs_diff,
        "worst_page": comparison.worst_page,
        "tolerance": tolerance,
        "agrees": comparison.agrees(tolerance),
        "pages": comparison.pages,
    });

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}

pub fn format_links(corpus: &Corpus) -> Result<String> {
    Ok(serde_json::to_string_pretty(&corpus.to_link_map())? + "\n")
}
