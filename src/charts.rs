//! Chart/table projection and session span
//!
//! Pure reshaping of [`SessionCounts`] into the chart, table, and image-index
//! values the presentation layer renders, plus the elapsed-time calculation.
//! No decisions are made here.

use crate::counts::{SessionCounts, EYE_BUCKET_CONTACT, EYE_BUCKET_NONE};
use crate::taxonomy::{Axis, Emotion, Gesture};
use crate::types::{AxisChart, EyeChart, ImageIndex, SessionTime, TableRow};

/// Derive elapsed session time from the first and last observation timestamps
///
/// Callers must pass chronologically ordered endpoints; the pipeline sorts
/// before calling this.
pub fn session_time(first_timestamp: i64, last_timestamp: i64) -> SessionTime {
    let span = last_timestamp - first_timestamp;
    SessionTime {
        minute: span / 60,
        second: span % 60,
    }
}

/// Eye-contact pie-chart frequencies
pub fn eye_chart(counts: &SessionCounts) -> EyeChart {
    EyeChart {
        eye_contact: counts.good_eye(),
        no_eye_contact: counts.bad_eye,
    }
}

/// Emotion good/bad pie-chart frequencies
pub fn emotion_chart(counts: &SessionCounts) -> AxisChart {
    AxisChart {
        good: counts.good_emotion(),
        bad: counts.bad_emotion,
    }
}

/// Gesture good/bad pie-chart frequencies
pub fn gesture_chart(counts: &SessionCounts) -> AxisChart {
    AxisChart {
        good: counts.good_gesture(),
        bad: counts.bad_gesture,
    }
}

/// Eye-contact table with the two synthetic bucket keys
pub fn eye_table(counts: &SessionCounts) -> Vec<TableRow> {
    vec![
        TableRow {
            key: "0".to_string(),
            name: "No Eye Contact".to_string(),
            frequency: counts.eye_buckets[EYE_BUCKET_NONE],
            axis: Axis::Eye,
        },
        TableRow {
            key: "1".to_string(),
            name: "Eye Contact".to_string(),
            frequency: counts.eye_buckets[EYE_BUCKET_CONTACT],
            axis: Axis::Eye,
        },
    ]
}

/// Emotion table over the full taxonomy, zero-frequency labels included
pub fn emotion_table(counts: &SessionCounts) -> Vec<TableRow> {
    Emotion::ALL
        .iter()
        .map(|emotion| TableRow {
            key: emotion.label().to_string(),
            name: emotion.display_name().to_string(),
            frequency: counts.emotion_counts[emotion.index()],
            axis: Axis::Emotion,
        })
        .collect()
}

/// Gesture table over the full taxonomy, zero-frequency labels included
pub fn gesture_table(counts: &SessionCounts) -> Vec<TableRow> {
    Gesture::ALL
        .iter()
        .map(|gesture| TableRow {
            key: gesture.label().to_string(),
            name: gesture.display_name().to_string(),
            frequency: counts.gesture_counts[gesture.index()],
            axis: Axis::Gesture,
        })
        .collect()
}

/// Eye bucket → image URLs
pub fn eye_images(counts: &SessionCounts) -> ImageIndex {
    let mut index = ImageIndex::new();
    index.insert("0".to_string(), counts.eye_images[EYE_BUCKET_NONE].clone());
    index.insert(
        "1".to_string(),
        counts.eye_images[EYE_BUCKET_CONTACT].clone(),
    );
    index
}

/// Emotion label → image URLs
pub fn emotion_images(counts: &SessionCounts) -> ImageIndex {
    Emotion::ALL
        .iter()
        .map(|emotion| {
            (
                emotion.label().to_string(),
                counts.emotion_images[emotion.index()].clone(),
            )
        })
        .collect()
}

/// Gesture label → image URLs
pub fn gesture_images(counts: &SessionCounts) -> ImageIndex {
    Gesture::ALL
        .iter()
        .map(|gesture| {
            (
                gesture.label().to_string(),
                counts.gesture_images[gesture.index()].clone(),
            )
        })
        .collect()
}
