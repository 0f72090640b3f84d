//! Pure formatting helpers for rendering profile fields.
//!
//! Every function here is total: malformed or absent input renders as a
//! placeholder, never as an error, so a partially populated profile still
//! displays in full.

use chrono::{DateTime, NaiveDateTime};

use crate::model::profile::{EquippedItem, Scalar};

/// Placeholder for timestamps that could not be interpreted.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Placeholder for absent display values.
pub const NA: &str = "N/A";

/// The string timestamp shape the API emits alongside epoch values.
const TIMESTAMP_INPUT_FORMAT: &str = "%d/%m/%Y : %I:%M:%S %p";
const TIMESTAMP_OUTPUT_FORMAT: &str = "%d %B %Y %H:%M:%S";

/// Characters Discord interprets as markdown markup.
const MARKDOWN_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Normalizes a timestamp field into `DD Month YYYY HH:MM:SS` (UTC).
///
/// Accepts either epoch seconds or a string matching the exact pattern
/// `DD/MM/YYYY : hh:mm:ss AM/PM`. Any other shape, or any parse failure,
/// yields `"Not Available"`.
pub fn format_timestamp(value: Option<&Scalar>) -> String {
    let formatted = match value {
        Some(Scalar::Int(seconds)) => DateTime::from_timestamp(*seconds, 0)
            .map(|datetime| datetime.format(TIMESTAMP_OUTPUT_FORMAT).to_string()),
        Some(Scalar::Float(seconds)) => DateTime::from_timestamp(*seconds as i64, 0)
            .map(|datetime| datetime.format(TIMESTAMP_OUTPUT_FORMAT).to_string()),
        Some(Scalar::Text(text)) => NaiveDateTime::parse_from_str(text, TIMESTAMP_INPUT_FORMAT)
            .ok()
            .map(|datetime| datetime.format(TIMESTAMP_OUTPUT_FORMAT).to_string()),
        _ => None,
    };

    formatted.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Backslash-escapes markdown-significant characters so API-supplied text
/// cannot be misinterpreted as message markup. Purely additive.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Renders an item list as one `[id](icon)` line per item.
///
/// An empty list is `"N/A"`; an absent id or icon within an item renders as
/// the placeholder.
pub fn format_items(items: &[EquippedItem]) -> String {
    if items.is_empty() {
        return NA.to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "[{}]({})",
                display_or_na(item.id.as_ref()),
                display_or_na(item.icon.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the equipped-skills slot, whose wire shape varies between a list
/// of ids and a single scalar.
pub fn format_skills(skills: Option<&serde_json::Value>) -> String {
    match skills {
        Some(serde_json::Value::Array(entries)) => {
            let parts: Vec<String> = entries
                .iter()
                .filter_map(|entry| match entry {
                    serde_json::Value::Number(value) => Some(value.to_string()),
                    serde_json::Value::String(value) => Some(value.clone()),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                NA.to_string()
            } else {
                parts.join(", ")
            }
        }
        Some(serde_json::Value::Number(value)) => value.to_string(),
        Some(serde_json::Value::String(value)) => value.clone(),
        _ => NA.to_string(),
    }
}

/// Scalar display with the `"N/A"` placeholder for absent values.
pub fn display_or_na(value: Option<&Scalar>) -> String {
    value.map(Scalar::to_string).unwrap_or_else(|| NA.to_string())
}
