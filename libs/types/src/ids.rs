//! Identifier types for epitope catalog entities
//!
//! Epitope identifiers are opaque strings assigned by the upstream registry
//! (e.g. "1C", "62GE"). Loci come from a small, open domain ("A", "B", "C",
//! "DR", "DQ", "DP", "MICA", ...) and are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an epitope
///
/// Never blank. Ordering is lexicographic on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpitopeId(String);

impl EpitopeId {
    /// Create a new EpitopeId
    ///
    /// # Panics
    /// Panics if the identifier is blank or whitespace-only
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.trim().is_empty(), "EpitopeId must not be blank");
        Self(s)
    }

    /// Try to create an EpitopeId, returning None if blank
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpitopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpitopeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Genetic locus classifier of an epitope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locus(String);

impl Locus {
    pub fn new(locus: impl Into<String>) -> Self {
        Self(locus.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locus {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
