//! Query Log Route - recent search history

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::models::QueryLogEntry;
use crate::AppState;

/// List the most recent logged queries
#[utoipa::path(
    get,
    path = "/latest",
    responses(
        (status = 200, description = "Up to 10 most recent logged queries, newest first", body = Vec<QueryLogEntry>),
        (status = 500, description = "Query log read failed"),
        (status = 503, description = "Query log not configured")
    ),
    tag = "QueryLog"
)]
pub async fn latest_queries(
    State(state): State<AppState>,
) -> Result<Json<Vec<QueryLogEntry>>, (StatusCode, String)> {
    let log = state.query_log.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "Query log not available".to_string(),
    ))?;

    let entries = log.fetch_recent().await.map_err(|e| {
        tracing::error!("Query log read failed: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred reading recent queries".to_string(),
        )
    })?;

    Ok(Json(entries))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/latest", get(latest_queries))
}
