//! Validated epitope dataset
//!
//! Built in one step from the two upstream reads. Either every record and
//! the allele catalog are present, or construction fails and nothing is
//! kept.

use std::collections::HashSet;

use types::epitope::{EpitopeRecord, EpitopeRow};
use types::errors::LoadError;

use crate::source::EpitopeSource;

/// Immutable epitope catalog plus the sorted allele name list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<EpitopeRecord>,
    allele_catalog: Vec<String>,
}

impl Dataset {
    /// Build the dataset from raw rows and catalog entries
    ///
    /// Records keep row order. The catalog is sorted lexicographically,
    /// deduplicated, and stripped of blank entries.
    pub fn build(rows: Vec<EpitopeRow>, catalog: Vec<String>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(rows.len());
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let record = EpitopeRecord::from_row(index, row)?;
            if !seen.insert(record.id().clone()) {
                return Err(LoadError::DuplicateEpitope {
                    id: record.id().to_string(),
                });
            }
            records.push(record);
        }

        let mut allele_catalog: Vec<String> = catalog
            .into_iter()
            .filter(|allele| !allele.trim().is_empty())
            .collect();
        allele_catalog.sort();
        allele_catalog.dedup();

        Ok(Self {
            records,
            allele_catalog,
        })
    }

    /// Take one snapshot from the source and build the dataset
    pub fn load(source: &dyn EpitopeSource) -> Result<Self, LoadError> {
        let snapshot = source.fetch_snapshot()?;
        Self::build(snapshot.epitopes, snapshot.alleles)
    }

    pub fn records(&self) -> &[EpitopeRecord] {
        &self.records
    }

    pub fn allele_catalog(&self) -> &[String] {
        &self.allele_catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
