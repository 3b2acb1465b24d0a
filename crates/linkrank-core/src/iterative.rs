//! PageRank by fixed-point iteration
//!
//! Starting from the uniform distribution, every round recomputes each
//! page's rank from the previous round:
//!
//! ```text
//! PR(p) = (1 - d) / N
//!       + d * sum over pages i linking to p of PR(i) / links(i)
//!       + d * sum over dangling pages i of PR(i) / N
//! ```
//!
//! Dangling pages link to every page, `p` included. The loop stops once no
//! page moved by `threshold` or more during a round. There is no round cap;
//! for `d < 1` the update is a contraction and always converges. With
//! `d = 1` a periodic corpus can oscillate forever.

use std::time::Instant;

use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::distribution::{Distribution, RankMethod, RankResult};
use crate::error::{check_damping, check_threshold, Result};
use crate::traits::RankEstimator;
use crate::{CONVERGENCE_THRESHOLD, DAMPING};

/// Iterative estimator configuration
#[derive(Debug, Clone)]
pub struct IterativeEstimator {
    /// Probability of following a link rather than jumping
    pub damping: f64,
    /// Stop once the largest per-page change is strictly below this
    pub threshold: f64,
}

impl Default for IterativeEstimator {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            threshold: CONVERGENCE_THRESHOLD,
        }
    }
}

impl IterativeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Iterate from the uniform distribution until convergence
    pub fn run(&self, corpus: &Corpus) -> Result<RankResult> {
        check_damping(self.damping)?;
        check_threshold(self.threshold)?;

        let start_time = Instant::now();
        let mut ranks = vec![1.0 / corpus.len() as f64; corpus.len()];
        let mut rounds = 0;

        loop {
            rounds += 1;
            let next = next_ranks(corpus, self.damping, &ranks);
            let delta = max_change(&ranks, &next);
            debug!(round = rounds, delta, "Iteration round");

            ranks = next;
            if delta < self.threshold {
                break;
            }
        }

        info!(
            pages = corpus.len(),
            rounds,
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "Iterative estimate converged"
        );

        Ok(RankResult::new(
            RankMethod::Iteration { rounds },
            Distribution::from_values(corpus, ranks),
        ))
    }
}

impl RankEstimator for IterativeEstimator {
    fn estimate(&self, corpus: &Corpus) -> Result<RankResult> {
        self.run(corpus)
    }

    fn name(&self) -> &'static str {
        "iteration"
    }
}

/// Iterate with the default convergence threshold
pub fn iterate_rank(corpus: &Corpus, damping: f64) -> Result<RankResult> {
    IterativeEstimator::new().with_damping(damping).run(corpus)
}

/// Apply exactly one update round to `ranks`
///
/// `ranks` must cover the pages of `corpus`.
pub fn update_round(corpus: &Corpus, damping: f64, ranks: &Distribution) -> Result<Distribution> {
    check_damping(damping)?;
    let current = ranks.to_values(corpus)?;
    Ok(Distribution::from_values(
        corpus,
        next_ranks(corpus, damping, &current),
    ))
}

/// One round of the recurrence; always allocates a fresh vector
fn next_ranks(corpus: &Corpus, damping: f64, ranks: &[f64]) -> Vec<f64> {
    let n = corpus.len() as f64;
    let jump = (1.0 - damping) / n;
    let dangling_share: f64 = corpus.dangling().map(|i| ranks[i] / n).sum();

    (0..corpus.len())
        .map(|page| {
            let linked: f64 = corpus
                .inbound(page)
                .iter()
                .map(|&i| ranks[i] / corpus.out_degree(i) as f64)
                .sum();
            jump + damping * linked + damping * dangling_share
        })
        .collect()
}

fn max_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
