use crate::error::AppError;
use crate::models::AllelesResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_alleles(State(state): State<AppState>) -> Result<Json<AllelesResponse>, AppError> {
    let matcher = state.matcher.clone();
    let alleles = tokio::task::spawn_blocking(move || matcher.allele_catalog())
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("catalog task failed: {}", e)))??;

    Ok(Json(AllelesResponse { alleles }))
}
