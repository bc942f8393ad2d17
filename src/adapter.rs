//! Observation parsing, validation, and ordering
//!
//! Parses the raw observation array a record store returns for one user and
//! prepares it for counting. Producers are expected to append observations
//! chronologically, but the engine sorts defensively before the session span
//! is computed rather than assuming it.

use crate::error::ReportError;
use crate::types::Observation;

/// Parse a JSON array of observations
pub fn parse_observations(json: &str) -> Result<Vec<Observation>, ReportError> {
    serde_json::from_str(json)
        .map_err(|e| ReportError::ParseError(format!("Failed to parse observations: {}", e)))
}

/// Validate a single observation
///
/// Label validity is already guaranteed by the closed enums; this checks the
/// numeric fields serde cannot.
pub fn validate(observation: &Observation) -> Result<(), ReportError> {
    if !observation.eye_contact.is_finite() {
        return Err(ReportError::MalformedObservation(format!(
            "eye_contact must be finite, got {}",
            observation.eye_contact
        )));
    }
    if !(0.0..=1.0).contains(&observation.eye_contact) {
        return Err(ReportError::MalformedObservation(format!(
            "eye_contact must be within [0, 1], got {}",
            observation.eye_contact
        )));
    }
    Ok(())
}

/// Return observations in chronological order
///
/// The sort is stable, so observations sharing a timestamp keep their
/// original relative order.
pub fn order_chronologically(observations: &[Observation]) -> Vec<Observation> {
    let mut ordered = observations.to_vec();
    ordered.sort_by_key(|o| o.timestamp);
    ordered
}
