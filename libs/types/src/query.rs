//! Allele query types
//!
//! A query is two allele sets: the patient's antibody alleles (required,
//! non-empty at the service boundary) and the patient's own HLA typing
//! (optional).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::QueryError;

/// Antibody and self allele sets for one matching request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlleleQuery {
    pub antibodies: BTreeSet<String>,
    #[serde(default)]
    pub self_alleles: BTreeSet<String>,
}

impl AlleleQuery {
    /// Build a query without validation
    ///
    /// An empty antibody set is accepted here; it simply matches nothing.
    pub fn new<A, S>(antibodies: A, self_alleles: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            antibodies: antibodies.into_iter().map(Into::into).collect(),
            self_alleles: self_alleles.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a query from raw request input
    ///
    /// Entries are trimmed and blank entries dropped. Fails if no antibody
    /// allele remains.
    pub fn validated<A, S>(antibodies: A, self_alleles: S) -> Result<Self, QueryError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let antibodies = normalize(antibodies);
        if antibodies.is_empty() {
            return Err(QueryError::EmptyAntibodies);
        }

        Ok(Self {
            antibodies,
            self_alleles: normalize(self_alleles),
        })
    }
}

fn normalize<I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
