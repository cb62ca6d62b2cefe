//! Matching logic module
//!
//! Turns the cached epitope records and one allele query into a ranked
//! result list. Pure in-memory computation: records are only read.

pub mod evaluate;
pub mod ranking;

pub use evaluate::evaluate;
pub use ranking::compare;

use types::epitope::EpitopeRecord;
use types::query::AlleleQuery;
use types::result::MatchResult;

/// Match every record against the query and rank the survivors
///
/// The full record set is scanned before sorting. Records without a
/// positive match are dropped. Ties on all ranking keys keep dataset order.
pub fn match_epitopes(records: &[EpitopeRecord], query: &AlleleQuery) -> Vec<MatchResult> {
    let mut ranked: Vec<(usize, MatchResult)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| evaluate(record, query).map(|result| (index, result)))
        .collect();

    ranked.sort_unstable_by(|(index_a, a), (index_b, b)| {
        ranking::compare(a, b).then(index_a.cmp(index_b))
    });

    ranked.into_iter().map(|(_, result)| result).collect()
}
