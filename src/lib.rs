//! Podium Report - Report engine for presenter behavior observations
//!
//! Podium turns a recorded session of timestamped behavioral observations
//! (eye-contact score, facial emotion, body gesture, reference image) into a
//! structured performance report through a deterministic pipeline:
//! parse/validate → classify & count → chart/table projection → narrative
//! synthesis.
//!
//! The engine is pure and synchronous: the same observation sequence always
//! yields a bit-identical [`Report`](types::Report). Fetching observations and
//! delivering the report are the caller's concern.

pub mod adapter;
pub mod charts;
pub mod counts;
pub mod error;
pub mod narrative;
pub mod pipeline;
pub mod taxonomy;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::ReportError;
pub use pipeline::{generate_report, report_to_json};
pub use taxonomy::{Axis, Emotion, Gesture, EYE_CONTACT_THRESHOLD};
pub use types::{Observation, Report};

/// Engine version embedded in CLI output
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for CLI output
pub const PRODUCER_NAME: &str = "podium-report";
