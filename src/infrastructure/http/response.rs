// SPDX-License-Identifier: MPL-2.0
//! Shape-tolerant decoding of `/videos` response bodies.
//!
//! Two body shapes are accepted:
//!
//! - `{"videos": [...], "total": 42}` (total optional)
//! - a bare `[...]` array
//!
//! Anything else that is still valid JSON decodes to an empty page. Inside
//! each record, flat fields win over their `snippet` counterparts and empty
//! strings count as missing.

use crate::domain::error::FetchError;
use crate::domain::video::{PageResult, VideoRecord};
use serde_json::Value;

/// Which body shape a response had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Object carrying a `videos` array.
    Wrapped,
    /// The body itself is the array of videos.
    BareArray,
    /// Valid JSON with neither shape.
    Unrecognized,
}

/// Parses a response body into a page.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if `body` is not valid JSON.
pub fn parse_page(body: &str) -> Result<(PageResult, ResponseShape), FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(normalize(&value))
}

/// Maps an already-parsed body onto a page.
#[must_use]
pub fn normalize(value: &Value) -> (PageResult, ResponseShape) {
    if let Some(items) = value.get("videos").and_then(Value::as_array) {
        let videos: Vec<VideoRecord> = items.iter().map(extract_record).collect();
        let total = value
            .get("total")
            .and_then(as_count)
            .unwrap_or(videos.len() as u64);
        return (PageResult::new(videos, total), ResponseShape::Wrapped);
    }

    if let Some(items) = value.as_array() {
        let videos: Vec<VideoRecord> = items.iter().map(extract_record).collect();
        let total = videos.len() as u64;
        return (PageResult::new(videos, total), ResponseShape::BareArray);
    }

    (PageResult::empty(), ResponseShape::Unrecognized)
}

/// Pulls the known fields out of one record, whatever its layout.
#[must_use]
pub fn extract_record(value: &Value) -> VideoRecord {
    VideoRecord {
        id: first_identifier(value, &["/id", "/videoId", "/snippet/resourceId/videoId"]),
        title: first_text(value, &["/title", "/snippet/title"]),
        description: first_text(value, &["/description", "/snippet/description"]),
        published_at: first_text(
            value,
            &[
                "/publishedAt",
                "/published_datetime",
                "/snippet/publishedAt",
                "/published_at",
            ],
        ),
        thumbnail_url: first_text(value, &["/thumbnails/medium/url", "/thumbnail_url"]),
    }
}

/// First non-empty string found at any of `pointers`.
fn first_text(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers.iter().find_map(|pointer| {
        value
            .pointer(pointer)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}

/// Like [`first_text`], but numeric ids are accepted too (0 counts as missing).
fn first_identifier(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers.iter().find_map(|pointer| match value.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads a non-negative count from a number or numeric string.
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.ceil() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
