//! Search Route - image search proxy
//!
//! HTTP handler that delegates to the search client and projector.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::models::Projection;
use crate::services::projection::project;
use crate::AppState;

/// Query-string parameters accepted by the search endpoint.
///
/// `offset` is the 1-based page number. It arrives as a raw string so that
/// non-numeric values fall back to page 1 instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub offset: Option<String>,
}

/// Resolve the effective page: absent, non-numeric, zero and negative all
/// default to 1. Values beyond `u32::MAX` saturate instead of truncating.
pub fn resolve_page(offset: Option<&str>) -> u32 {
    offset
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|page| *page > 0)
        .map(|page| u32::try_from(page).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Proxy an image search
#[utoipa::path(
    get,
    path = "/api/{query}",
    params(
        ("query" = String, Path, description = "Image search text"),
        ("offset" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "Projected image results, or an error object when the upstream payload was unusable", body = Projection),
        (status = 500, description = "Upstream search failed")
    ),
    tag = "Search"
)]
pub async fn search_images(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Projection>, (StatusCode, String)> {
    let page = resolve_page(params.offset.as_deref());

    // Best-effort, detached from the request: failures stay operator-side
    // and no ordering is guaranteed relative to the response.
    if let Some(log) = state.query_log.clone() {
        let logged = uri
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| uri.path().to_string());

        tokio::spawn(async move {
            if let Err(e) = log.insert(&logged).await {
                tracing::warn!("Query log write failed: {:?}", e);
            }
        });
    }

    let result = state.search.fetch_images(&query, page).await.map_err(|e| {
        tracing::error!("Image search for {:?} failed: {:?}", query, e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(project(&result)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/:query", get(search_images))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_offset_defaults_to_first_page() {
        assert_eq!(resolve_page(None), 1);
    }

    #[test]
    fn zero_offset_defaults_to_first_page() {
        assert_eq!(resolve_page(Some("0")), 1);
    }

    #[test]
    fn negative_offset_defaults_to_first_page() {
        assert_eq!(resolve_page(Some("-3")), 1);
    }

    #[test]
    fn non_numeric_offset_defaults_to_first_page() {
        assert_eq!(resolve_page(Some("abc")), 1);
        assert_eq!(resolve_page(Some("")), 1);
    }

    #[test]
    fn positive_offset_is_used_as_page() {
        assert_eq!(resolve_page(Some("2")), 2);
        assert_eq!(resolve_page(Some(" 7 ")), 7);
    }

    #[test]
    fn oversized_offset_saturates_instead_of_truncating() {
        assert_eq!(resolve_page(Some("4294967297")), u32::MAX);
        assert_eq!(resolve_page(Some("9223372036854775807")), u32::MAX);
    }
}
