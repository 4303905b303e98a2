//! Shape validation for decoded review API responses.

use serde_json::Value;

use crate::error::VigilError;

/// A response that passed the shape checks.
#[derive(Debug)]
pub struct Validated<'a> {
    /// Homework records, newest first, order untouched.
    pub homeworks: &'a [Value],
    /// Server-side timestamp; becomes the next poll's lower bound.
    pub current_date: i64,
}

/// Check a decoded response against the documented API contract.
///
/// A missing `homeworks` or `current_date` key is a contract violation, never
/// a "no data" case. Pure function, no side effects.
pub fn validate(response: &Value) -> Result<Validated<'_>, VigilError> {
    let object = response.as_object().ok_or(VigilError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(VigilError::MissingKey("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(VigilError::MissingKey("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or(VigilError::HomeworksNotAList)?;
    let current_date = current_date.as_i64().ok_or(VigilError::BadTimestamp)?;

    Ok(Validated {
        homeworks,
        current_date,
    })
}
