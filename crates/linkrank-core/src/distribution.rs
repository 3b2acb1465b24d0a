//! Probability distributions over corpus pages and ranking results

use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Page -> probability, covering every page of one corpus exactly once
///
/// Built once and never mutated. Iteration follows corpus order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    values: BTreeMap<String, f64>,
}

impl Distribution {
    /// Pair per-index values with the corpus' pages
    pub(crate) fn from_values(corpus: &Corpus, values: Vec<f64>) -> Self {
        debug_assert_eq!(corpus.len(), values.len());
        Self {
            values: corpus.pages().iter().cloned().zip(values).collect(),
        }
    }

    /// Uniform `1/N` over every page
    pub fn uniform(corpus: &Corpus) -> Self {
        let n = corpus.len();
        Self::from_values(corpus, vec![1.0 / n as f64; n])
    }

    /// Values in corpus index order
    pub(crate) fn to_values(&self, corpus: &Corpus) -> Result<Vec<f64>> {
        if self.values.len() != corpus.len() {
            return Err(LinkRankError::InvalidCorpus(format!(
                "distribution covers {} pages, corpus has {}",
                self.values.len(),
                corpus.len()
            )));
        }
        corpus
            .pages()
            .iter()
            .map(|page| {
                self.values.get(page).copied().ok_or_else(|| {
                    LinkRankError::InvalidCorpus(format!(
                        "distribution has no entry for page '{}'",
                        page
                    ))
                })
            })
            .collect()
    }

    /// Probability of `page`, if present
    pub fn get(&self, page: &str) -> Option<f64> {
        self.values.get(page).copied()
    }

    /// `(page, probability)` pairs in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(page, &p)| (page.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Largest absolute per-page difference to `other`
    ///
    /// Pages missing from either side count as probability 0 there.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

/// Which estimator produced a [`RankResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RankMethod {
    /// Markov chain sampling with a fixed number of draws
    Sampling { samples: usize },
    /// Fixed-point iteration; `rounds` is how many updates ran
    Iteration { rounds: usize },
}

impl RankMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMethod::Sampling { .. } => "sampling",
            RankMethod::Iteration { .. } => "iteration",
        }
    }
}

impl fmt::Display for RankMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMethod::Sampling { samples } => write!(f, "Sampling (n = {})", samples),
            RankMethod::Iteration { .. } => write!(f, "Iteration"),
        }
    }
}

/// A distribution tagged with the method that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    #[serde(flatten)]
    pub method: RankMethod,
    pub ranks: Distribution,
}

impl RankResult {
    pub fn new(method: RankMethod, ranks: Distribution) -> Self {
        Self { method, ranks }
    }

    /// Rank of a single page
    pub fn rank(&self, page: &str) -> Option<f64> {
        self.ranks.get(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::builder()
            .link("a", "b")
            .link("b", "c")
            .page("c")
            .build()
            .unwrap()
    }

    #[test]
    fn test_uniform() {
        let corpus = corpus();
        let dist = Distribution::uniform(&corpus);

        assert_eq!(dist.len(), 3);
        assert!((dist.total() - 1.0).abs() < 1e-12);
        for (_, p) in dist.iter() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_max_abs_diff() {
        let corpus = corpus();
        let a = Distribution::from_values(&corpus, vec![0.2, 0.3, 0.5]);
        let b = Distribution::from_values(&corpus, vec![0.25, 0.3, 0.45]);

        assert!((a.max_abs_diff(&b) - 0.05).abs() < 1e-12);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }

    #[test]
    fn test_to_values_rejects_mismatched_pages() {
        let corpus = corpus();
        let other = Corpus::builder().page("x").build().unwrap();
        let dist = Distribution::uniform(&other);

        assert!(dist.to_values(&corpus).is_err());
        assert_eq!(
            Distribution::uniform(&corpus).to_values(&corpus).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_result_serializes_method_tag() {
        let corpus = corpus();
        let result = RankResult::new(
            RankMethod::Sampling { samples: 10 },
            Distribution::uniform(&corpus),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["method"], "sampling");
        assert_eq!(json["samples"], 10);
        assert!(json["ranks"]["a"].is_f64());
        assert_eq!(result.method.to_string(), "Sampling (n = 10)");
    }
}
