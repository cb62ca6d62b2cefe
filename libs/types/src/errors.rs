//! Error types for the matching service
//!
//! Comprehensive error taxonomy using thiserror. All errors are `Clone` so a
//! single failed dataset load can be reported to every caller that waited
//! on it.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

/// Dataset load failures
///
/// A load failure leaves the dataset cache unready; retrying is safe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Data source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    #[error("Malformed epitope row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    #[error("Duplicate epitope id: {id}")]
    DuplicateEpitope { id: String },
}

impl LoadError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        LoadError::SourceUnavailable {
            reason: reason.into(),
        }
    }
}

/// Query validation errors, raised at the service boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("At least one antibody allele is required")]
    EmptyAntibodies,
}
