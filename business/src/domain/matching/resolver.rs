use rayon::prelude::*;

use super::distance::DistanceScratch;
use super::model::{MatchOutcome, MatchPolicy, MatchResult, NoMatch, confidence};
use super::normalize::normalize;
use crate::domain::catalog::model::{Catalog, CatalogEntry};

/// Finds the catalog products whose normalized name is closest to a query.
///
/// Every eligible entry is scored with the edit distance against the
/// normalized query. Candidates are ranked by `(distance, catalog position)`,
/// so equal distances resolve to the product that comes first in the
/// catalog, whether the scan runs sequentially or in parallel.
///
/// An empty query is not special-cased: it is compared like any other text,
/// which makes the shortest name the nominal best match. Callers that want
/// to detect a failed OCR pass should check the query themselves.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    policy: MatchPolicy,
}

impl Resolver {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog, query: &str) -> MatchOutcome<'a> {
        if catalog.is_empty() {
            return MatchOutcome::NoMatch(NoMatch::NoCandidates);
        }

        let query: Vec<char> = normalize(query).chars().collect();
        let best = if self.is_parallel(catalog) {
            catalog
                .entries()
                .par_iter()
                .enumerate()
                .map_init(DistanceScratch::default, |scratch, (position, entry)| {
                    (scratch.distance(&query, &entry.key), position)
                })
                .min()
        } else {
            let mut scratch = DistanceScratch::default();
            catalog
                .entries()
                .iter()
                .enumerate()
                .map(|(position, entry)| (scratch.distance(&query, &entry.key), position))
                .min()
        };

        let Some((distance, position)) = best else {
            return MatchOutcome::NoMatch(NoMatch::NoCandidates);
        };
        let result = to_result(catalog, &catalog.entries()[position], distance, query.len());

        if result.confidence < self.policy.min_confidence {
            MatchOutcome::NoMatch(NoMatch::BelowThreshold(result))
        } else {
            MatchOutcome::Matched(result)
        }
    }

    /// The `k` closest products, ascending by distance then catalog order.
    ///
    /// The confidence threshold is not applied here; low scoring candidates
    /// are still useful for "did you mean" suggestions.
    pub fn resolve_top_k<'a>(
        &self,
        catalog: &'a Catalog,
        query: &str,
        k: usize,
    ) -> Vec<MatchResult<'a>> {
        if k == 0 || catalog.is_empty() {
            return Vec::new();
        }

        let query: Vec<char> = normalize(query).chars().collect();
        let mut ranked: Vec<(usize, usize)> = if self.is_parallel(catalog) {
            catalog
                .entries()
                .par_iter()
                .enumerate()
                .map_init(DistanceScratch::default, |scratch, (position, entry)| {
                    (scratch.distance(&query, &entry.key), position)
                })
                .collect()
        } else {
            let mut scratch = DistanceScratch::default();
            catalog
                .entries()
                .iter()
                .enumerate()
                .map(|(position, entry)| (scratch.distance(&query, &entry.key), position))
                .collect()
        };

        if k < ranked.len() {
            ranked.select_nth_unstable(k);
            ranked.truncate(k);
        }
        ranked.sort_unstable();

        ranked
            .into_iter()
            .map(|(distance, position)| {
                to_result(catalog, &catalog.entries()[position], distance, query.len())
            })
            .collect()
    }

    fn is_parallel(&self, catalog: &Catalog) -> bool {
        catalog.size() >= self.policy.parallel_threshold
    }
}

fn to_result<'a>(
    catalog: &'a Catalog,
    entry: &CatalogEntry,
    distance: usize,
    query_len: usize,
) -> MatchResult<'a> {
    MatchResult {
        product: &catalog.products()[entry.index],
        index: entry.index,
        distance,
        confidence: confidence(distance, query_len, entry.key.len()),
    }
}
