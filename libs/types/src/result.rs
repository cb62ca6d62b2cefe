//! Match result types
//!
//! One `MatchResult` is produced per epitope that shares at least one
//! allele with the antibody set. Results own copies of the record data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ids::{EpitopeId, Locus};

/// Per-epitope match outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub epitope_id: EpitopeId,
    pub epitope_name: String,
    pub locus: Locus,
    pub all_epitope_alleles: Vec<String>,
    /// Epitope alleles present in the antibody set
    pub positive_matches: BTreeSet<String>,
    /// Required alleles absent from the antibody set
    pub missing_required_alleles: BTreeSet<String>,
    pub positive_match_count: usize,
    pub missing_required_count: usize,
    /// Positive matches that are also in the patient's own typing
    pub self_match_count: usize,
}
