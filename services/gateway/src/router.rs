use crate::handlers::{allele, epitope, health};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Browsers may cache preflight responses for this long
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/epitopes/match", post(epitope::match_epitopes))
        .route("/alleles", get(allele::list_alleles));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE);

    Router::new()
        .nest("/v1", api_routes)
        .route("/health", get(health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
