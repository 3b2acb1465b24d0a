//! Cross-checking two rankings of the same corpus

use crate::distribution::RankResult;
use crate::error::{LinkRankError, Result};
use serde::Serialize;

/// Per-page difference between two rankings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDelta {
    pub page: String,
    pub left: f64,
    pub right: f64,
    pub delta: f64,
}

/// Outcome of comparing two rankings page by page
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    pub pages: Vec<PageDelta>,
    pub max_abs_diff: f64,
    /// Page where the largest difference occurs
    pub worst_page: String,
}

impl Comparison {
    /// Whether no page differs by more than `tolerance`
    pub fn agrees(&self, tolerance: f64) -> bool {
        self.max_abs_diff <= tolerance
    }
}

/// Compare two results over the same page set
pub fn compare(left: &RankResult, right: &RankResult) -> Result<Comparison> {
    if left.ranks.len() != right.ranks.len() {
        return Err(LinkRankError::InvalidCorpus(format!(
            "cannot compare rankings over {} and {} pages",
            left.ranks.len(),
            right.ranks.len()
        )));
    }

    let mut pages = Vec::with_capacity(left.ranks.len());
    for (page, l) in left.ranks.iter() {
        let r = right.ranks.get(page).ok_or_else(|| {
            LinkRankError::InvalidCorpus(format!("page '{}' missing from {}", page, right.method))
        })?;
        pages.push(PageDelta {
            page: page.to_string(),
            left: l,
            right: r,
            delta: (l - r).abs(),
        });
    }

    let worst = pages
        .iter()
        .max_by(|a, b| a.delta.total_cmp(&b.delta))
        .map(|p| (p.page.clone(), p.delta))
        .unwrap_or_default();

    Ok(Comparison {
        left: left.method.to_string(),
        right: right.method.to_string(),
        pages,
        max_abs_diff: worst.1,
        worst_page: worst.0,
    })
}
