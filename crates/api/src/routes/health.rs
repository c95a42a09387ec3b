use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Overall service status reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

impl HealthStatus {
    /// `503` when degraded so load balancers stop routing here.
    pub fn status_code(self) -> StatusCode {
        match self {
            HealthStatus::Ok => StatusCode::OK,
            HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub store_healthy: bool,
}

impl HealthResponse {
    pub fn from_store(store_healthy: bool) -> Self {
        let status = if store_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store_healthy,
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let report = HealthResponse::from_store(state.contacts.store_healthy().await);
    (report.status.status_code(), Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
