use axum::{Json, extract::State};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime: u64,
    pub voters: usize,
}

pub async fn handle(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started_at.elapsed().as_secs(),
        voters: state.voters.count().await,
    })
}
