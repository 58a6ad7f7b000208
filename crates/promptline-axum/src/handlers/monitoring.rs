//! Monitoring handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use super::request_span;
use crate::dto::MonitoringResponse;
use crate::state::AppState;

/// Current pipeline metrics. Never fails; a broken source reports zeros.
pub async fn snapshot(State(state): State<AppState>) -> Json<MonitoringResponse> {
    let _span = request_span("monitoring").entered();
    let snapshot = state.metrics.snapshot();
    debug!(?snapshot, "Metrics snapshot");
    Json(snapshot.into())
}
