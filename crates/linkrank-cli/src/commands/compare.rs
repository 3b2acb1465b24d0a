//! Estimator cross-check command

use super::load_corpus;
use super::rank::estimate_all;
use crate::app::{CompareArgs, OutputFormat};
use crate::output::{format_comparison, FormatOptions};
use anyhow::{bail, Result};
use linkrank_core::error::exit_codes;
use linkrank_core::{compare, RankConfig, RankEstimator};

/// Run both estimators and report how far apart they are
///
/// Exits with a general error when they disagree beyond the tolerance.
pub fn run(args: CompareArgs, config: RankConfig, format: OutputFormat) -> Result<i32> {
    if !(args.tolerance.is_finite() && args.tolerance >= 0.0) {
        bail!(linkrank_core::LinkRankError::InvalidParameter {
            name: "tolerance",
            value: args.tolerance.to_string(),
            expected: "a finite value of at least 0",
        });
    }
    let config = args.rank.apply(config);
    config.validate()?;
    let corpus = load_corpus(&args.rank.common.corpus)?;

    let estimators: Vec<Box<dyn RankEstimator>> = vec![
        Box::new(config.sampling_estimator()),
        Box::new(config.iterative_estimator()),
    ];
    let results = estimate_all(&corpus, &estimators)?;
    let comparison = compare(&results[0], &results[1])?;

    let options = FormatOptions {
        precision: config.precision,
    };
    print!(
        "{}",
        format_comparison(&comparison, args.tolerance, format, &options)?
    );

    if comparison.agrees(args.tolerance) {
        Ok(exit_codes::SUCCESS)
    } else {
        tracing::warn!(
            "Estimators disagree by {:.6} at {}",
            comparison.max_abs_diff,
            comparison.worst_page
        );
        Ok(exit_codes::GENERAL_ERROR)
    }
}
