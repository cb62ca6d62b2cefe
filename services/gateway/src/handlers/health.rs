use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use matching_engine::CacheState;

/// Reports cache readiness without triggering a load
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.matcher.cache();
    let status = match cache.state() {
        CacheState::Ready => "ok",
        CacheState::Loading => "loading",
        CacheState::Uninitialized => "uninitialized",
    };

    Json(HealthResponse {
        status: status.to_string(),
        epitopes: cache.get().map(|dataset| dataset.len()),
    })
}
