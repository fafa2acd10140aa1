//! Projects the raw upstream payload into the reduced client shape.

use serde_json::Value;

use crate::models::{ProjectedImage, Projection};

const PARSE_ERROR: &str = "An error occurred while parsing the return JSON string";

/// Map each upstream item to `{link, alt, foundOn}`, preserving order.
///
/// A payload without a usable `items` list degrades to `Projection::Failed`.
/// This function never fails past its boundary; callers always get a value
/// they can serialize.
pub fn project(result: &Value) -> Projection {
    let items = match result.get("items").and_then(Value::as_array) {
        Some(items) => items,
        None => {
            return Projection::Failed {
                error: PARSE_ERROR.to_string(),
            }
        }
    };

    let images = items
        .iter()
        .map(|item| ProjectedImage {
            link: field(item, "link"),
            alt: field(item, "title"),
            found_on: field(item, "displayLink"),
        })
        .collect();

    Projection::Images(images)
}

fn field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
