//! Remote payload validation.

use orghub_club::RawClubRecord;
use serde_json::Value;
use thiserror::Error;

/// Errors describing an unusable club list payload.
///
/// Every variant is fatal: the run aborts before any filesystem mutation.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Body was not valid JSON.
    #[error("invalid JSON in club list response: {0}")]
    Json(#[from] serde_json::Error),
    /// Body was JSON but not an object.
    #[error("club list response is not an object")]
    NotAnObject,
    /// `success` was missing or not `true`.
    #[error("club list response did not report success")]
    NotSuccessful,
    /// `clubs` was missing or not an array.
    #[error("club list response has no clubs array")]
    MissingClubs,
}

/// Validates a raw response body and extracts the club records.
///
/// The body must be a JSON object with `success == true` and a `clubs`
/// array. Array entries of any JSON type are accepted here; projection
/// drops the unusable ones later.
pub fn parse_club_list(body: &str) -> Result<Vec<RawClubRecord>, SourceError> {
    let value: Value = serde_json::from_str(body)?;
    let object = value.as_object().ok_or(SourceError::NotAnObject)?;

    if object.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(SourceError::NotSuccessful);
    }
    let clubs = object
        .get("clubs")
        .and_then(Value::as_array)
        .ok_or(SourceError::MissingClubs)?;

    Ok(clubs.iter().map(RawClubRecord::from_value).collect())
}
