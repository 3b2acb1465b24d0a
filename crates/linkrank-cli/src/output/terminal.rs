//! Terminal output formatter

use super::FormatOptions;
use linkrank_core::{Comparison, Corpus, RankResult};

pub fn format_results(results: &[RankResult], options: &FormatOptions) -> String {
    let mut output = String::new();

    for result in results {
        output.push_str(&format!("PageRank Results from {}\n", result.method));
        for (page, rank) in result.ranks.iter() {
            output.push_str(&format!(
                "  {}: {:.prec$}\n",
                page,
                rank,
                prec = options.precision
            ));
        }
    }

    output
}

pub fn format_comparison(
    comparison: &Comparison,
    tolerance: f64,
    options: &FormatOptions,
) -> String {
    let prec = options.precision;
    let width = comparison
        .pages
        .iter()
        .map(|p| p.page.len())
        .max()
        .unwrap_or(0);

    let mut output = format!("{} vs {}\n", comparison.left, comparison.right);
    for p in &comparison.pages {
        output.push_str(&format!(
            "  {:<width$}  {:.prec$}  {:.prec$}  (diff {:.prec$})\n",
            p.page,
            p.left,
            p.right,
            p.delta,
        ));
    }
    output.push_str(&format!(
        "Max difference: {:.prec$} at {}\n",
        comparison.max_abs_diff, comparison.worst_page
    ));
    output.push_str(&format!(
        "Agreement within {}: {}\n",
        tolerance,
        if comparison.agrees(tolerance) { "yes" } else { "no" }
    ));

    output
}

pub fn format_links(corpus: &Corpus) -> String {
    let mut output = String::new();

    for (page, links) in corpus.to_link_map() {
        if links.is_empty() {
            output.push_str(&format!("{} -> (no links)\n", page));
        } else {
            let links: Vec<String> = links.into_iter().collect();
            output.push_str(&format!("{} -> {}\n", page, links.join(", ")));
        }
    }

    output
}
