//! One step of the random-surfer Markov chain
//!
//! With probability `damping` the surfer follows one of the current page's
//! links, chosen uniformly. Otherwise it jumps to any page of the corpus,
//! also uniformly. A page without links is treated as linking to every page,
//! itself included.

use crate::corpus::Corpus;
use crate::distribution::Distribution;
use crate::error::{check_damping, Result};

/// Next-page distribution for a surfer currently on `page`
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let index = corpus.require(page)?;
    Ok(Distribution::from_values(
        corpus,
        transition_weights(corpus, index, damping),
    ))
}

/// Next-page probabilities for the page at `index`, in corpus order
///
/// The caller is responsible for `damping` being in `[0, 1]`.
pub fn transition_weights(corpus: &Corpus, index: usize, damping: f64) -> Vec<f64> {
    let n = corpus.len() as f64;
    let links = corpus.outbound(index);

    if links.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }

    let mut weights = vec![(1.0 - damping) / n; corpus.len()];
    let follow = damping / links.len() as f64;
    for &target in links {
        weights[target] += follow;
    }
    weights
}
