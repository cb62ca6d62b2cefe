//! Per-record match evaluation
//!
//! Computes the positive matches, missing required alleles and self-match
//! count of one epitope against one query.

use std::collections::BTreeSet;

use types::epitope::EpitopeRecord;
use types::query::AlleleQuery;
use types::result::MatchResult;

/// Evaluate a single record
///
/// Returns `None` when the record shares no allele with the antibody set.
/// Such records are filtered out, not scored as zero.
pub fn evaluate(record: &EpitopeRecord, query: &AlleleQuery) -> Option<MatchResult> {
    let positive_matches: BTreeSet<String> = record
        .allele_set()
        .intersection(&query.antibodies)
        .cloned()
        .collect();

    if positive_matches.is_empty() {
        return None;
    }

    let missing_required_alleles: BTreeSet<String> = record
        .required_set()
        .difference(&query.antibodies)
        .cloned()
        .collect();

    let self_match_count = positive_matches
        .iter()
        .filter(|allele| query.self_alleles.contains(*allele))
        .count();

    Some(MatchResult {
        epitope_id: record.id().clone(),
        epitope_name: record.name().to_string(),
        locus: record.locus().clone(),
        all_epitope_alleles: record.alleles().to_vec(),
        positive_match_count: positive_matches.len(),
        missing_required_count: missing_required_alleles.len(),
        positive_matches,
        missing_required_alleles,
        self_match_count,
    })
}
