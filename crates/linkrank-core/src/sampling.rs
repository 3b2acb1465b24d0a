//! PageRank estimation by sampling the random-surfer Markov chain
//!
//! The walk starts on a uniformly random page and draws each following page
//! from the transition model of the current one. A page's rank is the
//! fraction of draws that landed on it. The number of draws is a fixed
//! budget; there is no adaptive stopping.

use std::time::Instant;

use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::distribution::{Distribution, RankMethod, RankResult};
use crate::error::{check_damping, check_samples, LinkRankError, Result};
use crate::traits::RankEstimator;
use crate::transition::transition_weights;
use crate::{DAMPING, SAMPLES};

/// Sampling estimator configuration
#[derive(Debug, Clone)]
pub struct SamplingEstimator {
    /// Probability of following a link rather than jumping
    pub damping: f64,
    /// Number of pages drawn, including the start page
    pub samples: usize,
    /// Seed for a reproducible walk; `None` uses the thread-local generator
    pub seed: Option<u64>,
}

impl Default for SamplingEstimator {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            seed: None,
        }
    }
}

impl SamplingEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the walk on `corpus`
    pub fn run(&self, corpus: &Corpus) -> Result<RankResult> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                sample_rank_with_rng(corpus, self.damping, self.samples, &mut rng)
            }
            None => sample_rank(corpus, self.damping, self.samples),
        }
    }
}

impl RankEstimator for SamplingEstimator {
    fn estimate(&self, corpus: &Corpus) -> Result<RankResult> {
        self.run(corpus)
    }

    fn name(&self) -> &'static str {
        "sampling"
    }
}

/// Estimate ranks from `n` draws using the thread-local random generator
pub fn sample_rank(corpus: &Corpus, damping: f64, n: usize) -> Result<RankResult> {
    sample_rank_with_rng(corpus, damping, n, &mut rand::thread_rng())
}

/// Estimate ranks from `n` draws using `rng`
pub fn sample_rank_with_rng<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankResult> {
    check_damping(damping)?;
    check_samples(n)?;

    let start_time = Instant::now();
    let mut walk = Walk::new(corpus, damping);
    let mut counts = vec![0usize; corpus.len()];

    let mut current = rng.gen_range(0..corpus.len());
    counts[current] += 1;
    debug!("Sampling walk starts at {}", corpus.page(current));

    for _ in 1..n {
        current = walk.step(current, rng)?;
        counts[current] += 1;
    }

    let ranks = counts
        .into_iter()
        .map(|count| count as f64 / n as f64)
        .collect();

    info!(
        pages = corpus.len(),
        samples = n,
        visited = walk.visited(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "Sampling estimate complete"
    );

    Ok(RankResult::new(
        RankMethod::Sampling { samples: n },
        Distribution::from_values(corpus, ranks),
    ))
}

/// Walk state: one weighted selector per page, built on first visit
struct Walk<'a> {
    corpus: &'a Corpus,
    damping: f64,
    selectors: Vec<Option<WeightedIndex<f64>>>,
}

impl<'a> Walk<'a> {
    fn new(corpus: &'a Corpus, damping: f64) -> Self {
        Self {
            corpus,
            damping,
            selectors: vec![None; corpus.len()],
        }
    }

    /// Draw the page following `current`
    fn step<R: Rng + ?Sized>(&mut self, current: usize, rng: &mut R) -> Result<usize> {
        let selector = match &mut self.selectors[current] {
            Some(selector) => selector,
            slot => slot.insert(selector_for(self.corpus, current, self.damping)?),
        };
        Ok(rng.sample(&*selector))
    }

    /// Number of distinct pages the walk has left from
    fn visited(&self) -> usize {
        self.selectors.iter().filter(|s| s.is_some()).count()
    }
}

fn selector_for(corpus: &Corpus, index: usize, damping: f64) -> Result<WeightedIndex<f64>> {
    let weights = transition_weights(corpus, index, damping);
    WeightedIndex::new(&weights).map_err(|e| LinkRankError::InvalidParameter {
        name: "damping",
        value: format!("{} ({})", damping, e),
        expected: "weights that form a probability distribution",
    })
}
