//! Error types for Podium Report

use thiserror::Error;

/// Errors that can occur during report generation
///
/// The engine never partially succeeds: it returns either a complete,
/// internally consistent report or one of these errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Session contains no observations")]
    EmptySession,

    #[error("Session of {0} observations exceeds the supported maximum")]
    SessionTooLarge(usize),

    #[error("Malformed observation: {0}")]
    MalformedObservation(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse observations: {0}")]
    ParseError(String),
}
