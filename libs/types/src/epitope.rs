//! Epitope catalog types
//!
//! `EpitopeRow` is the shape delivered by the upstream data source.
//! `EpitopeRecord` is the immutable, validated form held by the dataset
//! cache, with its lookup sets computed once at construction.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::errors::LoadError;
use crate::ids::{EpitopeId, Locus};

/// Raw epitope row as returned by the upstream bulk read
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpitopeRow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub locus: String,
    /// Alleles sharing the epitope; `null` upstream means none were harvested.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alleles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_alleles: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Immutable epitope record with precomputed lookup sets
///
/// `allele_set` and `required_set` are projections of `alleles` and
/// `required_alleles`. Fields are private so the projections cannot be
/// modified independently of their source lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpitopeRecord {
    id: EpitopeId,
    name: String,
    locus: Locus,
    alleles: Vec<String>,
    required_alleles: Vec<String>,
    allele_set: BTreeSet<String>,
    required_set: BTreeSet<String>,
}

impl EpitopeRecord {
    /// Build a record from already-validated parts
    pub fn new(
        id: EpitopeId,
        name: impl Into<String>,
        locus: Locus,
        alleles: Vec<String>,
        required_alleles: Vec<String>,
    ) -> Self {
        let allele_set = alleles.iter().cloned().collect();
        let required_set = required_alleles
            .iter()
            .filter(|allele| !allele.trim().is_empty())
            .cloned()
            .collect();

        Self {
            id,
            name: name.into(),
            locus,
            alleles,
            required_alleles,
            allele_set,
            required_set,
        }
    }

    /// Validate an upstream row. `index` is the row position, used for reporting.
    pub fn from_row(index: usize, row: EpitopeRow) -> Result<Self, LoadError> {
        let id = EpitopeId::try_new(row.id).ok_or_else(|| LoadError::MalformedRow {
            index,
            reason: "blank epitope id".to_string(),
        })?;

        Ok(Self::new(
            id,
            row.name,
            Locus::new(row.locus),
            row.alleles,
            row.required_alleles,
        ))
    }

    pub fn id(&self) -> &EpitopeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locus(&self) -> &Locus {
        &self.locus
    }

    /// The epitope's footprint, in upstream order
    pub fn alleles(&self) -> &[String] {
        &self.alleles
    }

    /// Required alleles as delivered, blanks included
    pub fn required_alleles(&self) -> &[String] {
        &self.required_alleles
    }

    pub fn allele_set(&self) -> &BTreeSet<String> {
        &self.allele_set
    }

    /// Required alleles with blank/whitespace-only entries discarded
    pub fn required_set(&self) -> &BTreeSet<String> {
        &self.required_set
    }
}
