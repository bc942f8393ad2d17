//! Closed label taxonomies for the three behavior axes
//!
//! The emotion and gesture label sets are fixed upstream by the classifiers
//! that produce observations. They are modeled as closed enums so an unknown
//! label is a deserialization error rather than a silent lookup miss.
//! Declaration order (bad partition first) is the canonical order for count
//! arrays and report tables.

use serde::{Deserialize, Serialize};

/// Eye-contact scores below this threshold count as "no eye contact".
///
/// A score of exactly 0.7 counts as eye contact.
pub const EYE_CONTACT_THRESHOLD: f64 = 0.7;

/// One of the three independent behavior dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Eye,
    Emotion,
    Gesture,
}

/// Facial emotion labels emitted by the upstream expression classifier
///
/// `None` is a real label: the classifier emits it when no face is detected,
/// and it belongs to the bad partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anger,
    Contempt,
    Disgust,
    Fear,
    Sadness,
    #[serde(rename = "None")]
    None,
    Happiness,
    Neutral,
    Surprise,
}

impl Emotion {
    /// All emotion labels in canonical order (bad partition first)
    pub const ALL: [Emotion; 9] = [
        Emotion::Anger,
        Emotion::Contempt,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::None,
        Emotion::Happiness,
        Emotion::Neutral,
        Emotion::Surprise,
    ];

    /// Number of labels in the bad partition
    pub const BAD_COUNT: usize = 6;

    /// Wire label as produced by the upstream classifier
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Contempt => "contempt",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::None => "None",
            Emotion::Happiness => "happiness",
            Emotion::Neutral => "neutral",
            Emotion::Surprise => "surprise",
        }
    }

    /// Human-readable name for tables (label with first letter capitalized)
    pub fn display_name(&self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Contempt => "Contempt",
            Emotion::Disgust => "Disgust",
            Emotion::Fear => "Fear",
            Emotion::Sadness => "Sadness",
            Emotion::None => "None",
            Emotion::Happiness => "Happiness",
            Emotion::Neutral => "Neutral",
            Emotion::Surprise => "Surprise",
        }
    }

    /// Whether this label belongs to the bad partition
    pub fn is_bad(&self) -> bool {
        self.index() < Self::BAD_COUNT
    }

    /// Position in canonical order, usable as a count-array index
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Body gesture labels emitted by the upstream gesture classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    ClaspHands,
    CrossArms,
    HideOneArm,
    HideTwoArms,
    Hold,
    Point,
    RotateHead,
    StandImproperly,
    TouchBody,
    CallMe,
    List,
    Move,
    OpenOneArm,
    OpenTwoArms,
    Roll,
    ShowLevel,
    ShowSmallThing,
    StandProperly,
}

impl Gesture {
    /// All gesture labels in canonical order (bad partition first)
    pub const ALL: [Gesture; 18] = [
        Gesture::ClaspHands,
        Gesture::CrossArms,
        Gesture::HideOneArm,
        Gesture::HideTwoArms,
        Gesture::Hold,
        Gesture::Point,
        Gesture::RotateHead,
        Gesture::StandImproperly,
        Gesture::TouchBody,
        Gesture::CallMe,
        Gesture::List,
        Gesture::Move,
        Gesture::OpenOneArm,
        Gesture::OpenTwoArms,
        Gesture::Roll,
        Gesture::ShowLevel,
        Gesture::ShowSmallThing,
        Gesture::StandProperly,
    ];

    /// Number of labels in the bad partition
    pub const BAD_COUNT: usize = 9;

    /// Wire label as produced by the upstream classifier
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::ClaspHands => "clasp_hands",
            Gesture::CrossArms => "cross_arms",
            Gesture::HideOneArm => "hide_one_arm",
            Gesture::HideTwoArms => "hide_two_arms",
            Gesture::Hold => "hold",
            Gesture::Point => "point",
            Gesture::RotateHead => "rotate_head",
            Gesture::StandImproperly => "stand_improperly",
            Gesture::TouchBody => "touch_body",
            Gesture::CallMe => "call_me",
            Gesture::List => "list",
            Gesture::Move => "move",
            Gesture::OpenOneArm => "open_one_arm",
            Gesture::OpenTwoArms => "open_two_arms",
            Gesture::Roll => "roll",
            Gesture::ShowLevel => "show_level",
            Gesture::ShowSmallThing => "show_small_thing",
            Gesture::StandProperly => "stand_properly",
        }
    }

    /// Human-readable name for tables and narrative text
    pub fn display_name(&self) -> &'static str {
        match self {
            Gesture::ClaspHands => "Hand Clasping",
            Gesture::CrossArms => "Crossing Arms",
            Gesture::HideOneArm => "Hide One Hand",
            Gesture::HideTwoArms => "Hide Two Hands",
            Gesture::Hold => "Hold Something",
            Gesture::Point => "Pointing",
            Gesture::RotateHead => "Head Rotation",
            Gesture::StandImproperly => "Improper Standing",
            Gesture::TouchBody => "Be Fidgety",
            Gesture::CallMe => "Self Mention",
            Gesture::List => "Item Listing",
            Gesture::Move => "Walking",
            Gesture::OpenOneArm => "Open One Arm",
            Gesture::OpenTwoArms => "Open Two Arms",
            Gesture::Roll => "Rolling Hands",
            Gesture::ShowLevel => "Indicate Level/Degree",
            Gesture::ShowSmallThing => "Show Small Thing",
            Gesture::StandProperly => "Proper Standing",
        }
    }

    /// Whether this label belongs to the bad partition
    pub fn is_bad(&self) -> bool {
        self.index() < Self::BAD_COUNT
    }

    /// Position in canonical order, usable as a count-array index
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_partition() {
        let bad: Vec<Emotion> = Emotion::ALL.iter().copied().filter(|e| e.is_bad()).collect();
        assert_eq!(
            bad,
            vec![
                Emotion::Anger,
                Emotion::Contempt,
                Emotion::Disgust,
                Emotion::Fear,
                Emotion::Sadness,
                Emotion::None,
            ]
        );
        assert!(!Emotion::Happiness.is_bad());
        assert!(!Emotion::Neutral.is_bad());
        assert!(!Emotion::Surprise.is_bad());
    }

    #[test]
    fn test_gesture_partition() {
        let bad_count = Gesture::ALL.iter().filter(|g| g.is_bad()).count();
        assert_eq!(bad_count, 9);
        assert!(Gesture::CrossArms.is_bad());
        assert!(Gesture::TouchBody.is_bad());
        assert!(!Gesture::Roll.is_bad());
        assert!(!Gesture::StandProperly.is_bad());
    }

    #[test]
    fn test_emotion_wire_labels() {
        let json = serde_json::to_string(&Emotion::Happiness).unwrap();
        assert_eq!(json, "\"happiness\"");

        // The no-face label is the literal "None", not snake_case
        let json = serde_json::to_string(&Emotion::None).unwrap();
        assert_eq!(json, "\"None\"");
        let parsed: Emotion = serde_json::from_str("\"None\"").unwrap();
        assert_eq!(parsed, Emotion::None);
    }

    #[test]
    fn test_gesture_wire_labels() {
        let json = serde_json::to_string(&Gesture::ClaspHands).unwrap();
        assert_eq!(json, "\"clasp_hands\"");

        for gesture in Gesture::ALL {
            let round: Gesture =
                serde_json::from_str(&format!("\"{}\"", gesture.label())).unwrap();
            assert_eq!(round, gesture);
        }
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let result: Result<Emotion, _> = serde_json::from_str("\"boredom\"");
        assert!(result.is_err());

        let result: Result<Gesture, _> = serde_json::from_str("\"jazz_hands\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), i);
        }
        for (i, gesture) in Gesture::ALL.iter().enumerate() {
            assert_eq!(gesture.index(), i);
        }
    }
}
