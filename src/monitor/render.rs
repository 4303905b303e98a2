//! Rendering of homework records into human-readable verdict messages.

use serde_json::Value;

use crate::error::VigilError;

/// Verdict texts keyed by the review API's closed set of status codes.
/// Extending this table is the whole change needed for a new verdict code.
pub const VERDICTS: &[(&str, &str)] = &[
    (
        "approved",
        "Review finished: the reviewer liked everything. Hooray!",
    ),
    ("reviewing", "The work was taken for review."),
    (
        "rejected",
        "Review finished: the reviewer has remarks.",
    ),
];

/// Render a homework record into the outbound notification text.
pub fn render(record: &Value) -> Result<String, VigilError> {
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let verdict = VERDICTS
        .iter()
        .find_map(|(code, text)| (*code == status).then_some(*text))
        .ok_or_else(|| VigilError::UnknownStatus(status.to_string()))?;

    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(VigilError::MissingName)?;

    Ok(format!("Review status changed for \"{name}\". {verdict}"))
}
