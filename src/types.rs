//! Data model for observations and reports
//!
//! An [`Observation`] is one timestamped behavioral sample produced upstream
//! (eye-contact score, emotion label, gesture label, reference image URL). A
//! full session is a non-empty chronological sequence of observations; the
//! [`Report`] is the derived value the engine produces from it. Reports have
//! no independent lifecycle: they are created fresh per request and never
//! mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Axis, Emotion, Gesture};

/// One timestamped behavioral sample for a presenter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Capture time in seconds (monotonic within a session)
    pub timestamp: i64,
    /// URL of the frame captured with this sample
    pub image_url: String,
    /// Eye-contact score in [0, 1] from the gaze classifier
    pub eye_contact: f64,
    /// Facial emotion label
    pub emotion: Emotion,
    /// Body gesture label
    pub gesture: Gesture,
}

/// Elapsed session time derived from first/last observation timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTime {
    pub minute: i64,
    /// Remaining seconds, non-negative and < 60
    pub second: i64,
}

/// Pie-chart frequencies for the eye-contact axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeChart {
    pub eye_contact: u32,
    pub no_eye_contact: u32,
}

/// Pie-chart frequencies for a good/bad partitioned axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisChart {
    pub good: u32,
    pub bad: u32,
}

/// One row of a per-label frequency table
///
/// Every label in the axis taxonomy gets a row, including zero-frequency
/// labels; consumers sort by frequency and disable the example-image action
/// when the frequency is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Wire label ("0"/"1" on the eye axis)
    pub key: String,
    /// Display name for rendering
    pub name: String,
    pub frequency: u32,
    /// Axis this row belongs to
    #[serde(rename = "type")]
    pub axis: Axis,
}

/// Narrative feedback paragraphs, one per axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub eye: String,
    pub emotion: String,
    pub gesture: String,
}

/// Label → ordered image URLs, preserving observation order
///
/// A BTreeMap keeps serialization deterministic; the first URL per label is
/// the example image consumers show.
pub type ImageIndex = BTreeMap<String, Vec<String>>;

/// The complete performance report for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Elapsed session time
    pub time: SessionTime,
    pub eye_chart: EyeChart,
    pub emotion_chart: AxisChart,
    pub gesture_chart: AxisChart,
    pub eye_table: Vec<TableRow>,
    pub emotion_table: Vec<TableRow>,
    pub gesture_table: Vec<TableRow>,
    pub eye_images: ImageIndex,
    pub emotion_images: ImageIndex,
    pub gesture_images: ImageIndex,
    pub summary: Summary,
}
