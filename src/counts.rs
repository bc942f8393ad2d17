//! Classifier & counter: the single pass over a session
//!
//! Buckets every observation along the three axes (eye contact by the 0.7
//! threshold, emotion and gesture by their bad partitions), accumulates
//! per-label frequencies in taxonomy order, and collects image URLs per label
//! in observation order. Every downstream phase derives from the result of
//! this one scan.

use crate::error::ReportError;
use crate::taxonomy::{Emotion, Gesture, EYE_CONTACT_THRESHOLD};
use crate::types::Observation;

/// Largest session length the per-label counters can represent
pub const MAX_OBSERVATIONS: usize = u32::MAX as usize;

/// Check that a session length fits the counters
pub fn ensure_countable(len: usize) -> Result<(), ReportError> {
    if len > MAX_OBSERVATIONS {
        return Err(ReportError::SessionTooLarge(len));
    }
    Ok(())
}

/// Index of the "no eye contact" bucket
pub const EYE_BUCKET_NONE: usize = 0;
/// Index of the "eye contact" bucket
pub const EYE_BUCKET_CONTACT: usize = 1;

/// Accumulated classification counts for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCounts {
    /// Total number of observations
    pub total: u32,
    /// Observations below the eye-contact threshold
    pub bad_eye: u32,
    /// Observations whose emotion is in the bad partition
    pub bad_emotion: u32,
    /// Observations whose gesture is in the bad partition
    pub bad_gesture: u32,
    /// Eye bucket frequencies, indexed by [`EYE_BUCKET_NONE`]/[`EYE_BUCKET_CONTACT`]
    pub eye_buckets: [u32; 2],
    /// Per-emotion frequencies in taxonomy order
    pub emotion_counts: [u32; 9],
    /// Per-gesture frequencies in taxonomy order
    pub gesture_counts: [u32; 18],
    /// Image URLs per eye bucket, in observation order
    pub eye_images: [Vec<String>; 2],
    /// Image URLs per emotion label, in observation order
    pub emotion_images: [Vec<String>; 9],
    /// Image URLs per gesture label, in observation order
    pub gesture_images: [Vec<String>; 18],
}

impl SessionCounts {
    fn empty() -> Self {
        Self {
            total: 0,
            bad_eye: 0,
            bad_emotion: 0,
            bad_gesture: 0,
            eye_buckets: [0; 2],
            emotion_counts: [0; 9],
            gesture_counts: [0; 18],
            eye_images: std::array::from_fn(|_| Vec::new()),
            emotion_images: std::array::from_fn(|_| Vec::new()),
            gesture_images: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Observations at or above the eye-contact threshold
    pub fn good_eye(&self) -> u32 {
        self.total - self.bad_eye
    }

    /// Observations whose emotion is in the good partition
    pub fn good_emotion(&self) -> u32 {
        self.total - self.bad_emotion
    }

    /// Observations whose gesture is in the good partition
    pub fn good_gesture(&self) -> u32 {
        self.total - self.bad_gesture
    }

    /// Frequency of a single gesture label
    pub fn gesture_frequency(&self, gesture: Gesture) -> u32 {
        self.gesture_counts[gesture.index()]
    }
}

/// Classify and count a session in a single pass
///
/// Each observation contributes to exactly one bucket per axis. Observations
/// must already be validated and the sequence length checked with
/// [`ensure_countable`]; counting itself cannot fail.
pub fn count_observations(observations: &[Observation]) -> SessionCounts {
    let mut counts = SessionCounts::empty();
    counts.total = u32::try_from(observations.len()).unwrap_or(u32::MAX);

    for obs in observations {
        let eye_bucket = if obs.eye_contact < EYE_CONTACT_THRESHOLD {
            counts.bad_eye += 1;
            EYE_BUCKET_NONE
        } else {
            EYE_BUCKET_CONTACT
        };
        counts.eye_buckets[eye_bucket] += 1;
        counts.eye_images[eye_bucket].push(obs.image_url.clone());

        if obs.emotion.is_bad() {
            counts.bad_emotion += 1;
        }
        if obs.gesture.is_bad() {
            counts.bad_gesture += 1;
        }

        counts.emotion_counts[obs.emotion.index()] += 1;
        counts.gesture_counts[obs.gesture.index()] += 1;

        counts.emotion_images[obs.emotion.index()].push(obs.image_url.clone());
        counts.gesture_images[obs.gesture.index()].push(obs.image_url.clone());
    }

    counts
}
