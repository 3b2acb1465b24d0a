//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::RankConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank a corpus of linked pages by random-surfer PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to $LINKRANK_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank with both estimators
    Rank(RankArgs),

    /// Rank by sampling the random surfer
    Sample(SampleArgs),

    /// Rank by iterating until convergence
    Iterate(IterateArgs),

    /// Cross-check the two estimators
    Compare(CompareArgs),

    /// Show the links found in a corpus
    Links(LinksArgs),
}

/// Flags shared by every ranking command
#[derive(Args)]
pub struct CorpusArgs {
    /// Directory of .html pages or a JSON adjacency file
    pub corpus: PathBuf,

    /// Probability of following a link
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Decimal places to print
    #[arg(long)]
    pub precision: Option<usize>,
}

#[derive(Args)]
pub struct SamplingArgs {
    /// Number of samples drawn
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct IterationArgs {
    /// Convergence threshold for iteration
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub common: CorpusArgs,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    #[command(flatten)]
    pub iteration: IterationArgs,
}

#[derive(Args)]
pub struct SampleArgs {
    #[command(flatten)]
    pub common: CorpusArgs,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}

#[derive(Args)]
pub struct IterateArgs {
    #[command(flatten)]
    pub common: CorpusArgs,

    #[command(flatten)]
    pub iteration: IterationArgs,
}

impl CorpusArgs {
    /// Layer command-line flags over the loaded config
    pub fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        config
    }
}

impl SamplingArgs {
    pub fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}

impl IterationArgs {
    pub fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        config
    }
}

impl RankArgs {
    pub fn apply(&self, config: RankConfig) -> RankConfig {
        let config = self.common.apply(config);
        let config = self.sampling.apply(config);
        self.iteration.apply(config)
    }
}

impl SampleArgs {
    pub fn apply(&self, config: RankConfig) -> RankConfig {
        self.sampling.apply(self.common.apply(config))
    }
}

impl IterateArgs {
    pub fn apply(&self, config: RankConfig) -> RankConfig {
        self.iteration.apply(self.common.apply(config))
    }
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub rank: RankArgs,

    /// Largest per-page difference still counted as agreement
    #[arg(long, default_value = "0.05")]
    pub tolerance: f64,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of .html pages or a JSON adjacency file
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
