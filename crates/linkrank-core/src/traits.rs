//! Estimator trait definitions

use crate::corpus::Corpus;
use crate::distribution::RankResult;
use crate::error::Result;

/// Anything that turns a corpus into a ranking
///
/// Implementations hold their own parameters and never mutate the corpus,
/// so one corpus can be shared by several estimators at once.
pub trait RankEstimator: Send + Sync {
    /// Estimate the stationary distribution of the random surfer
    fn estimate(&self, corpus: &Corpus) -> Result<RankResult>;

    /// Short method name
    fn name(&self) -> &'static str;
}
