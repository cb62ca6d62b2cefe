use crate::error::AppError;
use crate::models::MatchRequest;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use types::result::MatchResult;

const MISSING_ALLELES: &str = "`input_alleles` array is required";

pub async fn match_epitopes(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    // 1. Validate request shape
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let antibodies = payload
        .input_alleles
        .ok_or_else(|| AppError::BadRequest(MISSING_ALLELES.into()))?;
    let self_alleles = payload.self_alleles;

    // 2. Validate and match off the async runtime; the first call may load
    //    the dataset
    let matcher = state.matcher.clone();
    let results =
        tokio::task::spawn_blocking(move || matcher.match_request(antibodies, self_alleles))
            .await
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("match task failed: {}", e)))??;

    Ok(Json(results))
}
