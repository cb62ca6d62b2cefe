//! Epitope Matching Engine
//!
//! Given a patient's antibody alleles (and optionally the patient's own HLA
//! typing), finds the epitopes that share at least one allele with the
//! antibody set and ranks them for clinical review.
//!
//! **Components:**
//! - `source`: upstream data-source contract (epitope rows + allele catalog)
//! - `dataset`: validated, immutable dataset built from one load
//! - `cache`: lazily loaded, concurrency-safe dataset holder
//! - `matching`: per-record set algebra and ranking
//! - `engine`: facade used by the service boundary
//!
//! **Key Invariants:**
//! - Per-record lookup sets are computed once at load, never per request
//! - The upstream fetch runs at most once per successful load
//! - Deterministic matching (same inputs → same outputs, same order)
//! - Cached records are never mutated by a request

pub mod cache;
pub mod dataset;
pub mod engine;
pub mod matching;
pub mod source;

pub use cache::{CacheState, CacheStats, DatasetCache};
pub use dataset::Dataset;
pub use engine::EpitopeMatcher;
pub use matching::match_epitopes;
pub use source::{DatasetSnapshot, EpitopeSource, InMemorySource, JsonFileSource};
