//! Result ranking
//!
//! Order for clinical review:
//! 1. `self_match_count` ascending
//! 2. `positive_match_count` descending
//! 3. `missing_required_count` ascending

use std::cmp::Ordering;

use types::result::MatchResult;

/// Compare two results by ranking keys only
///
/// Returns `Equal` for full ties; callers add their own final tie-break.
pub fn compare(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.self_match_count
        .cmp(&b.self_match_count)
        .then_with(|| b.positive_match_count.cmp(&a.positive_match_count))
        .then_with(|| a.missing_required_count.cmp(&b.missing_required_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{EpitopeId, Locus};

    fn result(self_count: usize, positive: usize, missing: usize) -> MatchResult {
        MatchResult {
            epitope_id: EpitopeId::new("E"),
            epitope_name: "E".to_string(),
            locus: Locus::new("A"),
            all_epitope_alleles: vec![],
            positive_matches: Default::default(),
            missing_required_alleles: Default::default(),
            positive_match_count: positive,
            missing_required_count: missing,
            self_match_count: self_count,
        }
    }

    #[test]
    fn test_self_count_dominates() {
        assert_eq!(compare(&result(0, 1, 5), &result(1, 9, 0)), Ordering::Less);
    }

    #[test]
    fn test_more_positive_first() {
        assert_eq!(compare(&result(0, 3, 2), &result(0, 2, 0)), Ordering::Less);
    }

    #[test]
    fn test_fewer_missing_first() {
        assert_eq!(compare(&result(0, 2, 1), &result(0, 2, 3)), Ordering::Less);
    }

    #[test]
    fn test_full_tie_is_equal() {
        assert_eq!(compare(&result(1, 2, 3), &result(1, 2, 3)), Ordering::Equal);
    }
}
