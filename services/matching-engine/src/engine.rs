//! Matching engine facade
//!
//! Joins the dataset cache and the matcher behind the two calls the
//! service boundary needs: match a query, read the allele catalog.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;
use types::errors::{EngineError, LoadError};
use types::query::AlleleQuery;
use types::result::MatchResult;

use crate::cache::DatasetCache;
use crate::matching::match_epitopes;
use crate::source::EpitopeSource;

/// Main matching engine
#[derive(Debug, Clone)]
pub struct EpitopeMatcher {
    cache: Arc<DatasetCache>,
}

impl EpitopeMatcher {
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache }
    }

    /// Build a matcher with a fresh cache over `source`
    pub fn from_source(source: Arc<dyn EpitopeSource>) -> Self {
        Self::new(Arc::new(DatasetCache::new(source)))
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Load the dataset eagerly, returning the number of epitopes
    pub fn warm_up(&self) -> Result<usize, LoadError> {
        Ok(self.cache.ensure_loaded()?.len())
    }

    /// Match a query against the cached dataset
    ///
    /// Loads the dataset on first use. An empty result is a normal outcome.
    pub fn match_alleles(&self, query: &AlleleQuery) -> Result<Vec<MatchResult>, LoadError> {
        let dataset = self.cache.ensure_loaded()?;

        let started = Instant::now();
        let results = match_epitopes(dataset.records(), query);
        debug!(
            antibodies = query.antibodies.len(),
            self_alleles = query.self_alleles.len(),
            scanned = dataset.len(),
            matched = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Epitope match complete"
        );

        Ok(results)
    }

    /// Validate raw request input, then match it
    ///
    /// Entry point for the service boundary: an invalid query is reported
    /// before the dataset is touched, so it never triggers a load.
    pub fn match_request<A, S>(
        &self,
        antibodies: A,
        self_alleles: S,
    ) -> Result<Vec<MatchResult>, EngineError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let query = AlleleQuery::validated(antibodies, self_alleles)?;
        Ok(self.match_alleles(&query)?)
    }

    /// Sorted, deduplicated allele catalog
    pub fn allele_catalog(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.cache.ensure_loaded()?.allele_catalog().to_vec())
    }
}
