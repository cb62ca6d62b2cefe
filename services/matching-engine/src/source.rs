//! Upstream data sources
//!
//! The dataset is populated from two bulk reads: the epitope rows and the
//! allele name catalog. Each read succeeds or fails as a whole.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use types::epitope::EpitopeRow;
use types::errors::LoadError;

/// Contract for the external data source that fills the dataset cache
pub trait EpitopeSource: Send + Sync {
    /// Bulk read of every known epitope
    fn fetch_epitopes(&self) -> Result<Vec<EpitopeRow>, LoadError>;

    /// Bulk read of the allele name catalog (any order, may contain duplicates)
    fn fetch_allele_catalog(&self) -> Result<Vec<String>, LoadError>;

    /// Short description for logs
    fn describe(&self) -> String;

    /// Both reads for one load
    ///
    /// Sources that can serve both from a single consistent read should
    /// override this.
    fn fetch_snapshot(&self) -> Result<DatasetSnapshot, LoadError> {
        Ok(DatasetSnapshot {
            epitopes: self.fetch_epitopes()?,
            alleles: self.fetch_allele_catalog()?,
        })
    }
}

/// On-disk dataset snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub epitopes: Vec<EpitopeRow>,
    #[serde(default)]
    pub alleles: Vec<String>,
}

/// Reads a JSON dataset snapshot on every fetch
///
/// The file is re-read per call so a retry after a failed load picks up a
/// corrected file. A load reads it once, through `fetch_snapshot`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<DatasetSnapshot, LoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            LoadError::unavailable(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            LoadError::unavailable(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl EpitopeSource for JsonFileSource {
    fn fetch_epitopes(&self) -> Result<Vec<EpitopeRow>, LoadError> {
        Ok(self.read_snapshot()?.epitopes)
    }

    fn fetch_allele_catalog(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.read_snapshot()?.alleles)
    }

    fn describe(&self) -> String {
        format!("json-file:{}", self.path.display())
    }

    fn fetch_snapshot(&self) -> Result<DatasetSnapshot, LoadError> {
        self.read_snapshot()
    }
}

/// Fixed in-memory dataset
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: DatasetSnapshot,
}

impl InMemorySource {
    pub fn new(epitopes: Vec<EpitopeRow>, alleles: Vec<String>) -> Self {
        Self {
            snapshot: DatasetSnapshot { epitopes, alleles },
        }
    }

    /// Catalog derived from every allele mentioned by the rows
    pub fn from_rows(epitopes: Vec<EpitopeRow>) -> Self {
        let alleles = epitopes
            .iter()
            .flat_map(|row| row.alleles.iter().chain(row.required_alleles.iter()))
            .cloned()
            .collect();
        Self::new(epitopes, alleles)
    }
}

impl EpitopeSource for InMemorySource {
    fn fetch_epitopes(&self) -> Result<Vec<EpitopeRow>, LoadError> {
        Ok(self.snapshot.epitopes.clone())
    }

    fn fetch_allele_catalog(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.snapshot.alleles.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory:{} epitopes", self.snapshot.epitopes.len())
    }
}
