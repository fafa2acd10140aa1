//! Client-facing response models.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// One image result as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectedImage {
    /// Direct link to the image.
    pub link: String,
    /// Upstream result title, used as alt text.
    pub alt: String,
    /// Domain the image was found on.
    #[serde(rename = "foundOn")]
    pub found_on: String,
}

/// Outcome of projecting an upstream payload into `ProjectedImage`s.
///
/// Serialized untagged: clients receive a bare JSON array on success or an
/// object with an `error` field when the upstream shape was unusable, and
/// tell the two apart by shape alone.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Projection {
    Images(Vec<ProjectedImage>),
    Failed { error: String },
}

/// One logged query as returned by `/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QueryLogEntry {
    /// Day the query was made.
    pub date: NaiveDate,
    /// The logged request path.
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_images_serialize_as_bare_array() {
        let projection = Projection::Images(vec![ProjectedImage {
            link: "a".to_string(),
            alt: "b".to_string(),
            found_on: "c".to_string(),
        }]);

        let value = serde_json::to_value(&projection).unwrap();
        assert_eq!(value, json!([{"link": "a", "alt": "b", "foundOn": "c"}]));
    }

    #[test]
    fn projection_failure_serializes_as_error_object() {
        let projection = Projection::Failed {
            error: "bad payload".to_string(),
        };

        let value = serde_json::to_value(&projection).unwrap();
        assert_eq!(value, json!({"error": "bad payload"}));
    }

    #[test]
    fn query_log_entry_serializes_day_granularity_date() {
        let entry = QueryLogEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            q: "/api/cats".to_string(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"date": "2024-03-07", "q": "/api/cats"}));
    }
}
