//! Markdown output formatter

use super::FormatOptions;
use linkrank_core::{Comparison, Corpus, RankResult};

pub fn format_results(results: &[RankResult], options: &FormatOptions) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    for result in results {
        output.push_str(&format!("## {}\n\n", result.method));
        output.push_str("| Page | Rank |\n|------|------|\n");
        for (page, rank) in result.ranks.iter() {
            output.push_str(&format!(
                "| `{}` | {:.prec$} |\n",
                page,
                rank,
                prec = options.precision
            ));
        }
        output.push('\n');
    }

    output
}

pub fn format_comparison(
    comparison: &Comparison,
    tolerance: f64,
    options: &FormatOptions,
) -> String {
    let prec = options.precision;
    let mut output = format!(
        "# {} vs {}\n\n| Page | {} | {} | Diff |\n|------|------|------|------|\n",
        comparison.left, comparison.right, comparison.left, comparison.right
    );

    for p in &comparison.pages {
        output.push_str(&format!(
            "| `{}` | {:.prec$} | {:.prec$} | {:.prec$} |\n",
            p.page, p.left, p.right, p.delta
        ));
    }

    output.push_str(&format!(
        "\n- **Max difference**: {:.prec$} (`{}`)\n- **Agrees within {}**: {}\n",
        comparison.max_abs_diff,
        comparison.worst_page,
        tolerance,
        comparison.agrees(tolerance)
    ));

    output
}

pub fn format_links(corpus: &Corpus) -> String {
    let mut output = String::from("# Links\n\n");

    for (page, links) in corpus.to_link_map() {
        output.push_str(&format!("- `{}`\n", page));
        for link in links {
            output.push_str(&format!("  - `{}`\n", link));
        }
    }

    output
}
