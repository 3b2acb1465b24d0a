//! Ranking commands

use super::load_corpus;
use crate::app::{IterateArgs, OutputFormat, RankArgs, SampleArgs};
use crate::output::{format_results, FormatOptions};
use anyhow::Result;
use linkrank_core::error::exit_codes;
use linkrank_core::{Corpus, RankConfig, RankEstimator, RankResult};
use std::path::Path;

/// Rank with sampling first, then iteration
pub fn run_both(args: RankArgs, config: RankConfig, format: OutputFormat) -> Result<i32> {
    let config = args.apply(config);
    let estimators: Vec<Box<dyn RankEstimator>> = vec![
        Box::new(config.sampling_estimator()),
        Box::new(config.iterative_estimator()),
    ];
    run(&args.common.corpus, &config, &estimators, format)
}

/// Rank by sampling only
pub fn run_sample(args: SampleArgs, config: RankConfig, format: OutputFormat) -> Result<i32> {
    let config = args.apply(config);
    let estimators: Vec<Box<dyn RankEstimator>> = vec![Box::new(config.sampling_estimator())];
    run(&args.common.corpus, &config, &estimators, format)
}

/// Rank by iteration only
pub fn run_iterate(args: IterateArgs, config: RankConfig, format: OutputFormat) -> Result<i32> {
    let config = args.apply(config);
    let estimators: Vec<Box<dyn RankEstimator>> = vec![Box::new(config.iterative_estimator())];
    run(&args.common.corpus, &config, &estimators, format)
}

fn run(
    corpus: &Path,
    config: &RankConfig,
    estimators: &[Box<dyn RankEstimator>],
    format: OutputFormat,
) -> Result<i32> {
    config.validate()?;
    let corpus = load_corpus(corpus)?;
    let results = estimate_all(&corpus, estimators)?;

    let options = FormatOptions {
        precision: config.precision,
    };
    print!("{}", format_results(&results, format, &options)?);
    Ok(exit_codes::SUCCESS)
}

/// Run each estimator in turn over the same corpus
pub fn estimate_all(
    corpus: &Corpus,
    estimators: &[Box<dyn RankEstimator>],
) -> Result<Vec<RankResult>> {
    estimators
        .iter()
        .map(|estimator| {
            tracing::debug!("Running {} estimator", estimator.name());
            Ok(estimator.estimate(corpus)?)
        })
        .collect()
}
