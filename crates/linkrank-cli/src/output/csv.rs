//! CSV output formatter

use super::FormatOptions;
use anyhow::Result;
use linkrank_core::{Comparison, Corpus, RankMethod, RankResult};

pub fn format_results(results: &[RankResult], options: &FormatOptions) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["method", "samples", "page", "rank"])?;

    for result in results {
        let samples = match result.method {
            RankMethod::Sampling { samples } => samples.to_string(),
            RankMethod::Iteration { .. } => String::new(),
        };
        for (page, rank) in result.ranks.iter() {
            let rank = format!("{:.prec$}", rank, prec = options.precision);
            writer.write_record([result.method.as_str(), samples.as_str(), page, rank.as_str()])?;
        }
    }

    finish(writer)
}

pub fn format_comparison(comparison: &Comparison, options: &FormatOptions) -> Result<String> {
    let prec = options.precision;
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["page", "sampling", "iteration", "diff"])?;

    for p in &comparison.pages {
        writer.write_record([
            p.page.clone(),
            format!("{:.prec$}", p.left),
            format!("{:.prec$}", p.right),
            format!("{:.prec$}", p.delta),
        ])?;
    }

    finish(writer)
}

pub fn format_links(corpus: &Corpus) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "target"])?;

    for (page, links) in corpus.to_link_map() {
        for link in links {
            writer.write_record([page.as_str(), link.as_str()])?;
        }
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
