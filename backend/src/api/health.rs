//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub users: usize,
    pub events: usize,
    pub locations: usize,
    pub participants: usize,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check - reports the size of each collection
async fn readyz(State(state): State<AppState>) -> Json<ReadyResponse> {
    let stats = state.db.stats();

    Json(ReadyResponse {
        ready: true,
        users: stats.users,
        events: stats.events,
        locations: stats.locations,
        participants: stats.participants,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
