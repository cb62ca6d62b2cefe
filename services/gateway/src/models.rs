use serde::{Deserialize, Serialize};

/// Body of `POST /v1/epitopes/match`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    /// Patient antibody alleles; required and non-empty
    #[serde(default, alias = "antibodies")]
    pub input_alleles: Option<Vec<String>>,
    /// Patient's own HLA typing
    #[serde(default)]
    pub self_alleles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllelesResponse {
    pub alleles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub epitopes: Option<usize>,
}
