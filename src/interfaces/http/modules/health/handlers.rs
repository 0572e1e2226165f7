//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::SharedFacade;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub facade: SharedFacade,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub store: StoreCounts,
}

/// Number of stored entities per kind
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreCounts {
    pub users: usize,
    pub places: usize,
    pub reviews: usize,
    pub amenities: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let repos = state.facade.repositories();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store: StoreCounts {
            users: repos.users().len(),
            places: repos.places().len(),
            reviews: repos.reviews().len(),
            amenities: repos.amenities().len(),
        },
    })
}
