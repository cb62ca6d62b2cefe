//! Types library for the epitope matching service
//!
//! This library provides the data model shared by the matching engine and
//! the gateway: epitope records with their precomputed lookup sets, allele
//! queries, match results and the error taxonomy.
//!
//! # Modules
//! - `ids`: Identifiers (EpitopeId, Locus)
//! - `epitope`: Raw upstream rows and immutable epitope records
//! - `query`: Antibody / self allele query
//! - `result`: Per-epitope match result
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod epitope;
pub mod query;
pub mod result;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::epitope::*;
    pub use crate::query::*;
    pub use crate::result::*;
    pub use crate::errors::*;
}
