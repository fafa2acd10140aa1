//! Image search client for the Google Custom Search API.
//!
//! One outbound request per call: no timeout, no retry. The `Display` of
//! each error variant is the opaque label clients see; status and
//! content-type detail stays in the variant for operator logs.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

const BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Results per upstream page, fixed by the upstream API.
const PAGE_SIZE: u64 = 10;

/// Search-path failures.
#[derive(Debug, Error)]
pub enum ImageSearchError {
    #[error("An error occurred while making the request to an external API [1]")]
    UpstreamRequest {
        status: u16,
        content_type: Option<String>,
    },

    #[error("An error occurred while making the request to an external API [2]")]
    UpstreamTransport(#[source] reqwest::Error),

    #[error("An error occurred parsing the return JSON string")]
    UpstreamParse(#[source] serde_json::Error),
}

/// Client for the upstream image search endpoint.
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    engine_id: String,
    api_key: String,
}

impl ImageSearchClient {
    /// Creates a client with the configured engine id and credential.
    pub fn new(engine_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            engine_id: engine_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch one page of image results as raw upstream JSON.
    pub async fn fetch_images(&self, query: &str, page: u32) -> Result<Value, ImageSearchError> {
        let start = start_offset(page);

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("searchType", "image"),
                ("start", start.to_string().as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(ImageSearchError::UpstreamTransport)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        if status != StatusCode::OK || !is_json_content_type(content_type.as_deref()) {
            return Err(ImageSearchError::UpstreamRequest {
                status: status.as_u16(),
                content_type,
            });
        }

        let body = response
            .text()
            .await
            .map_err(ImageSearchError::UpstreamTransport)?;

        serde_json::from_str(&body).map_err(ImageSearchError::UpstreamParse)
    }
}

/// 1-based offset of the first result on `page`.
///
/// Computed in `u64` so no `u32` page can overflow the multiply.
pub fn start_offset(page: u32) -> u64 {
    (u64::from(page.max(1)) - 1) * PAGE_SIZE + 1
}

/// The upstream must answer with `application/json`, optionally followed by
/// a charset suffix.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.map_or(false, |v| v.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_one() {
        assert_eq!(start_offset(1), 1);
    }

    #[test]
    fn third_page_starts_at_twenty_one() {
        assert_eq!(start_offset(3), 21);
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        assert_eq!(start_offset(0), 1);
    }

    #[test]
    fn large_page_does_not_overflow() {
        assert_eq!(start_offset(429_496_731), 4_294_967_301);
        assert_eq!(start_offset(u32::MAX), (u64::from(u32::MAX) - 1) * 10 + 1);
    }

    #[test]
    fn json_content_type_is_accepted() {
        assert!(is_json_content_type(Some("application/json")));
    }

    #[test]
    fn json_content_type_with_charset_is_accepted() {
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
    }

    #[test]
    fn html_content_type_is_rejected() {
        assert!(!is_json_content_type(Some("text/html")));
    }

    #[test]
    fn missing_content_type_is_rejected() {
        assert!(!is_json_content_type(None));
    }
}
