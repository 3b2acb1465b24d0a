//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    /// The corpus is empty, references a page it does not contain, or a
    /// page outside the corpus was requested.
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    /// A ranking parameter is outside its valid range.
    #[error("Invalid parameter: {name} = {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Corpus not found: {0}")]
    CorpusNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CorpusNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidCorpus(_) | Self::InvalidParameter { .. } | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    pub(crate) fn parameter(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}

/// Reject a damping factor outside `[0, 1]`, including NaN.
pub fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(LinkRankError::parameter("damping", damping, "a value in [0, 1]"))
    }
}

/// Reject an empty sample budget.
pub fn check_samples(samples: usize) -> Result<()> {
    if samples >= 1 {
        Ok(())
    } else {
        Err(LinkRankError::parameter("samples", samples, "at least 1"))
    }
}

/// Reject a convergence threshold that could never be met or never fail.
pub fn check_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(LinkRankError::parameter(
            "threshold",
            threshold,
            "a finite value greater than 0",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damping_bounds() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert!(check_damping(0.85).is_ok());
        assert!(check_damping(-0.01).is_err());
        assert!(check_damping(1.01).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_samples_and_threshold() {
        assert!(check_samples(0).is_err());
        assert!(check_samples(1).is_ok());
        assert!(check_threshold(0.001).is_ok());
        assert!(check_threshold(0.0).is_err());
        assert!(check_threshold(f64::INFINITY).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let err = LinkRankError::InvalidCorpus("empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);

        let err = LinkRankError::parameter("samples", 0, "at least 1");
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: samples = 0 (expected at least 1)"
        );

        let err = LinkRankError::CorpusNotFound("missing/".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }
}
