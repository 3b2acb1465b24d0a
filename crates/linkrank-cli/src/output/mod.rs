//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use linkrank_core::{Comparison, Corpus, RankResult};

/// Format options
pub struct FormatOptions {
    /// Decimal places for ranks
    pub precision: usize,
}

/// Format one or more ranking results
pub fn format_results(
    results: &[RankResult],
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_results(results),
        OutputFormat::Csv => csv::format_results(results, options),
        OutputFormat::Md => Ok(markdown::format_results(results, options)),
        OutputFormat::Cli => Ok(terminal::format_results(results, options)),
    }
}

/// Format an estimator comparison
pub fn format_comparison(
    comparison: &Comparison,
    tolerance: f64,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_comparison(comparison, tolerance),
        OutputFormat::Csv => csv::format_comparison(comparison, options),
        OutputFormat::Md => Ok(markdown::format_comparison(comparison, tolerance, options)),
        OutputFormat::Cli => Ok(terminal::format_comparison(comparison, tolerance, options)),
    }
}

/// Format the adjacency of a corpus
pub fn format_links(corpus: &Corpus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_links(corpus),
        OutputFormat::Csv => csv::format_links(corpus),
        OutputFormat::Md => Ok(markdown::format_links(corpus)),
        OutputFormat::Cli => Ok(terminal::format_links(corpus)),
    }
}
