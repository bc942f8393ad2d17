//! Report pipeline orchestration
//!
//! Public API for report generation. The pipeline is a chain of pure phases:
//! validate → order → classify & count → project charts/tables → synthesize
//! narrative. It runs to completion without I/O, so calling it twice with the
//! same observations yields a bit-identical report.

use crate::adapter::{order_chronologically, parse_observations, validate};
use crate::charts;
use crate::counts::{count_observations, ensure_countable};
use crate::error::ReportError;
use crate::narrative;
use crate::types::{Observation, Report};

/// Generate a performance report from one session's observations
///
/// Observations may arrive in any order; they are stably sorted by timestamp
/// before the session span is computed.
///
/// # Errors
/// - [`ReportError::EmptySession`] when the sequence is empty
/// - [`ReportError::SessionTooLarge`] when the sequence exceeds what the
///   counters can represent
/// - [`ReportError::MalformedObservation`] when an eye-contact score is not
///   finite or outside [0, 1]
pub fn generate_report(observations: &[Observation]) -> Result<Report, ReportError> {
    if observations.is_empty() {
        return Err(ReportError::EmptySession);
    }
    ensure_countable(observations.len())?;
    for obs in observations {
        validate(obs)?;
    }

    let ordered = order_chronologically(observations);
    let counts = count_observations(&ordered);

    // Non-empty is checked above; first/last always exist
    let first = ordered.first().map(|o| o.timestamp).unwrap_or_default();
    let last = ordered.last().map(|o| o.timestamp).unwrap_or_default();

    Ok(Report {
        time: charts::session_time(first, last),
        eye_chart: charts::eye_chart(&counts),
        emotion_chart: charts::emotion_chart(&counts),
        gesture_chart: charts::gesture_chart(&counts),
        eye_table: charts::eye_table(&counts),
        emotion_table: charts::emotion_table(&counts),
        gesture_table: charts::gesture_table(&counts),
        eye_images: charts::eye_images(&counts),
        emotion_images: charts::emotion_images(&counts),
        gesture_images: charts::gesture_images(&counts),
        summary: narrative::synthesize(&counts),
    })
}

/// Convert an observation JSON array to report JSON (stateless, one-shot)
///
/// This is the boundary a transport layer calls: the raw list a record store
/// returns for one user goes in, the serialized report comes out.
pub fn report_to_json(observations_json: &str) -> Result<String, ReportError> {
    let observations = parse_observations(observations_json)?;
    let report = generate_report(&observations)?;
    serde_json::to_string(&report).map_err(ReportError::from)
}
