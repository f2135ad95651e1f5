use business::domain::matching::model::{
    DEFAULT_MIN_CONFIDENCE, DEFAULT_PARALLEL_THRESHOLD, MatchPolicy,
};

use super::ConfigError;

/// Resolver tuning read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub min_confidence: f64,
    pub parallel_threshold: usize,
}

impl ResolverConfig {
    /// Load resolver configuration from environment variables
    ///
    /// Environment variables:
    /// - MATCH_MIN_CONFIDENCE: Matches under this confidence are reported as
    ///   no match, between 0 and 1 (default: 0.0)
    /// - MATCH_PARALLEL_THRESHOLD: Catalog size from which the scan runs on
    ///   all cores (default: 2048)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let min_confidence = match lookup("MATCH_MIN_CONFIDENCE") {
            Some(value) => parse_confidence("MATCH_MIN_CONFIDENCE", value)?,
            None => DEFAULT_MIN_CONFIDENCE,
        };
        let parallel_threshold = match lookup("MATCH_PARALLEL_THRESHOLD") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "MATCH_PARALLEL_THRESHOLD",
                    value,
                })?,
            None => DEFAULT_PARALLEL_THRESHOLD,
        };

        Ok(Self {
            min_confidence,
            parallel_threshold,
        })
    }

    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy::default()
            .with_min_confidence(self.min_confidence)
            .with_parallel_threshold(self.parallel_threshold)
    }
}

pub fn parse_confidence(key: &'static str, value: String) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if (0.0..=1.0).contains(&parsed) => Ok(parsed),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
