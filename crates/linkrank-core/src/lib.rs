//! Linkrank Core Library
//!
//! Random-surfer PageRank over a fixed corpus of linked pages.
//!
//! # Features
//! - Transition model of the damped random surfer, with dangling pages
//!   treated as linking to every page
//! - Sampling estimator that walks the Markov chain for a fixed budget
//! - Iterative estimator that repeats the closed-form update until it
//!   converges
//! - Page-by-page comparison of the two estimates
//!
//! # Example
//!
//! ```rust
//! use linkrank_core::{iterate_rank, Corpus, SamplingEstimator};
//!
//! let corpus = Corpus::builder()
//!     .link("1.html", "2.html")
//!     .link("2.html", "1.html")
//!     .build()
//!     .unwrap();
//!
//! let iterated = iterate_rank(&corpus, 0.85).unwrap();
//! assert!((iterated.rank("1.html").unwrap() - 0.5).abs() < 1e-6);
//!
//! let sampled = SamplingEstimator::new().with_seed(1).run(&corpus).unwrap();
//! assert!((sampled.ranks.total() - 1.0).abs() < 1e-9);
//! ```

pub mod compare;
pub mod config;
pub mod corpus;
pub mod distribution;
pub mod error;
pub mod iterative;
pub mod sampling;
pub mod traits;
pub mod transition;

pub use compare::{compare, Comparison, PageDelta};
pub use config::RankConfig;
pub use corpus::{crawl, extract_links, Corpus, CorpusBuilder, LinkMap};
pub use distribution::{Distribution, RankMethod, RankResult};
pub use error::{LinkRankError, Error, Result};
pub use iterative::{iterate_rank, update_round, IterativeEstimator};
pub use sampling::{sample_rank, sample_rank_with_rng, SamplingEstimator};
pub use traits::RankEstimator;
pub use transition::{transition, transition_weights};

/// Reference damping factor
pub const DAMPING: f64 = 0.85;

/// Reference sample count for the sampling estimator
pub const SAMPLES: usize = 10_000;

/// Reference convergence threshold for the iterative estimator
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
