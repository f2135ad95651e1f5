use crate::domain::product::model::Product;

/// Best candidate for a query.
///
/// `product` borrows from the catalog that was searched; `index` is its
/// position among all loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub product: &'a Product,
    pub index: usize,
    pub distance: usize,
    pub confidence: f64,
}

/// Why a resolve call produced no match.
#[derive(Debug, Clone, PartialEq)]
pub enum NoMatch<'a> {
    /// The catalog has no eligible products.
    NoCandidates,
    /// The closest product scored under the configured minimum confidence.
    BelowThreshold(MatchResult<'a>),
}

impl std::fmt::Display for NoMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoMatch::NoCandidates => write!(f, "no_candidates"),
            NoMatch::BelowThreshold(_) => write!(f, "below_threshold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    Matched(MatchResult<'a>),
    NoMatch(NoMatch<'a>),
}

impl<'a> MatchOutcome<'a> {
    pub fn matched(&self) -> Option<&MatchResult<'a>> {
        match self {
            MatchOutcome::Matched(result) => Some(result),
            MatchOutcome::NoMatch(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Normalized-distance score in `[0, 1]`.
///
/// `1 - distance / max(query_len, name_len, 1)`. A ranking signal, not a
/// probability.
pub fn confidence(distance: usize, query_len: usize, name_len: usize) -> f64 {
    let longest = query_len.max(name_len).max(1);
    (1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0)
}

/// Tuning for the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPolicy {
    /// Best matches scoring under this are reported as [`NoMatch::BelowThreshold`].
    /// `0.0` keeps the "always return the closest product" behavior.
    pub min_confidence: f64,
    /// Catalogs with at least this many eligible products are scanned in parallel.
    pub parallel_threshold: usize,
}

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MatchPolicy {
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = if min_confidence.is_nan() {
            DEFAULT_MIN_CONFIDENCE
        } else {
            min_confidence.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}
