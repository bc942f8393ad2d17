//! Narrative synthesis: templated feedback per axis
//!
//! Applies a three-tier ratio policy (boundaries at 0.5 and 0.9, identical
//! for all axes) to pick a prose template per axis. The gesture narrative
//! additionally ranks offending bad gestures and overused good gestures so
//! the text can name concrete behaviors.

use crate::counts::SessionCounts;
use crate::taxonomy::Gesture;
use crate::types::Summary;

/// Lower tier boundary: below this the negative template is used
const TIER_LOW: f64 = 0.5;
/// Upper tier boundary: at or above this the positive template is used
const TIER_HIGH: f64 = 0.9;

/// Share of total observations above which a good gesture counts as overused
const OVERUSE_SHARE: f64 = 0.12;

/// Good gestures that are checked for excessive use, in taxonomy order
const OVERUSE_CANDIDATES: [Gesture; 2] = [Gesture::Move, Gesture::Roll];

/// Fixed lead-in phrase for each axis narrative
const EYE_LEAD_IN: &str = "Let's start with your eye contact. ";
const EMOTION_LEAD_IN: &str = "Moreover, ";
const GESTURE_LEAD_IN: &str = "Finally, about your gestures, ";

/// Fraction of observations classified as good on an axis
fn good_ratio(bad: u32, total: u32) -> f64 {
    1.0 - (bad as f64 / total as f64)
}

/// Synthesize the three narrative paragraphs from session counts
///
/// `counts.total` must be non-zero; the pipeline rejects empty sessions
/// before this point.
pub fn synthesize(counts: &SessionCounts) -> Summary {
    Summary {
        eye: format!("{}{}", EYE_LEAD_IN, eye_feedback(counts)),
        emotion: format!("{}{}", EMOTION_LEAD_IN, emotion_feedback(counts)),
        gesture: format!("{}{}", GESTURE_LEAD_IN, gesture_feedback(counts)),
    }
}

fn eye_feedback(counts: &SessionCounts) -> &'static str {
    let ratio = good_ratio(counts.bad_eye, counts.total);
    if ratio < TIER_LOW {
        "According to the results, you have not made enough eye contact with your \
         audience. Our suggestion is that you need to make more eye contact with your \
         audience because eye contact is one of the body languages that not only shows \
         your confidence in the presentation but also gives more trust to your audience."
    } else if ratio < TIER_HIGH {
        "Our system thinks that you are great at making eye contact with your audience \
         in sufficient proportion to other attention points."
    } else {
        // The positive tier carries a too-much-eye-contact caveat
        "You are great at making eye contact with your audience. However, making too \
         much eye contact may cause your audience to feel stared at and get a bit \
         uncomfortable. We suggest that you should not always put your eyes on your \
         audience; instead, you may sometimes look at your presentation slides or look \
         around."
    }
}

fn emotion_feedback(counts: &SessionCounts) -> &'static str {
    let ratio = good_ratio(counts.bad_emotion, counts.total);
    if ratio < TIER_LOW {
        "your facial expressions looked uncomfortable, nervous, or in a bad mood, which \
         can affect your audience's feelings and engagement. Here, we recommend you to \
         practice or record your presentation in front of a mirror and relax tension \
         from your face while delivering your presentation."
    } else if ratio < TIER_HIGH {
        "you have made good facial expressions during your presentation. However, your \
         facial expressions sometimes looked a bit uncomfortable, nervous, or in a bad \
         mood, which can also affect your audience's feelings and engagement. Here, we \
         recommend you to practice or record your presentation in front of a mirror and \
         relax tension from your face while delivering your presentation."
    } else {
        "you smoothly made an excellent facial expression during your presentation, \
         which can effectively enhance your point and draw the audience's attention."
    }
}

/// Bad gestures that occurred, sorted by frequency descending
///
/// The sort is stable, so labels with equal frequency keep taxonomy order.
pub fn bad_top(counts: &SessionCounts) -> Vec<(Gesture, u32)> {
    let mut ranked: Vec<(Gesture, u32)> = Gesture::ALL
        .iter()
        .filter(|g| g.is_bad())
        .map(|&g| (g, counts.gesture_frequency(g)))
        .filter(|&(_, freq)| freq > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Good gestures used beyond the overuse share, sorted by frequency descending
pub fn good_top(counts: &SessionCounts) -> Vec<(Gesture, u32)> {
    let mut ranked: Vec<(Gesture, u32)> = OVERUSE_CANDIDATES
        .iter()
        .map(|&g| (g, counts.gesture_frequency(g)))
        .filter(|&(_, freq)| freq as f64 / counts.total as f64 > OVERUSE_SHARE)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Display name of a ranked entry, lowercased for mid-sentence use
fn named(ranked: &[(Gesture, u32)], position: usize) -> String {
    ranked[position].0.display_name().to_lowercase()
}

fn gesture_feedback(counts: &SessionCounts) -> String {
    let ratio = good_ratio(counts.bad_gesture, counts.total);
    let bad = bad_top(counts);

    if ratio < TIER_LOW {
        let observed = "our system noticed that your overall gestures looked \
             uncomfortable or nervous and sometimes lacked confidence during the \
             presentation.";
        // A sub-0.5 ratio with no counted bad gesture cannot happen with a
        // consistent taxonomy, but the ranking is never indexed blindly.
        let Some(offenders) = list_offenders(&bad) else {
            return format!(
                "{} As our advice, try to keep your posture open and relaxed in your \
                 next presentation.",
                observed
            );
        };
        format!(
            "{} Additionally, you mostly did {}. As our advice, you should not make \
             those gestures for your next presentation.",
            observed, offenders
        )
    } else if ratio < TIER_HIGH {
        let praised = "you were doing great in making the overall gestures!";
        let Some(offenders) = list_offenders(&bad) else {
            return format!(
                "{} A few moments still came across as tense; keeping your posture \
                 open throughout will make the result even better next time.",
                praised
            );
        };
        format!(
            "{} Unfortunately, there were a few bad gestures, such as {}. These \
             gestures can make your audience perceive the discomfort, nervousness, or \
             diffidence from you. To get a better positive result, please consider not \
             making those gestures in the next time.",
            praised, offenders
        )
    } else {
        let good = good_top(counts);
        let mut text =
            "the system observed your excellent work on making proper gestures.".to_string();
        match good.len() {
            0 => {
                if bad.is_empty() {
                    text.push_str(" Please keep going in this direction!");
                }
            }
            1 => {
                let name = named(&good, 0);
                text.push_str(&format!(
                    " You were making the {} too much. Even though {} while presenting \
                     is good, excessively making this action can show your nervousness \
                     and probably distract your audience from the presentation.",
                    name, name
                ));
            }
            _ => {
                let (first, second) = (named(&good, 0), named(&good, 1));
                text.push_str(&format!(
                    " You were making the {} and {} too much. Even though {} and {} \
                     while presenting are good things to do, excessively making these \
                     actions can show your nervousness and probably distract your \
                     audience from the presentation.",
                    first, second, first, second
                ));
            }
        }
        text
    }
}

/// Join the top 1-3 offending gestures into a natural-language list
fn list_offenders(bad: &[(Gesture, u32)]) -> Option<String> {
    match bad.len() {
        0 => None,
        1 => Some(named(bad, 0)),
        2 => Some(format!("{} and {}", named(bad, 0), named(bad, 1))),
        _ => Some(format!(
            "{}, {}, and {}",
            named(bad, 0),
            named(bad, 1),
            named(bad, 2)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::count_observations;
    use crate::taxonomy::Emotion;
    use crate::types::Observation;

    fn make_observation(eye_contact: f64, emotion: Emotion, gesture: Gesture) -> Observation {
        Observation {
            timestamp: 0,
            image_url: "https://img.example.com/frame.jpg".to_string(),
            eye_contact,
            emotion,
            gesture,
        }
    }

    fn counts_for(observations: Vec<Observation>) -> SessionCounts {
        count_observations(&observations)
    }

    #[test]
    fn test_lead_in_phrases() {
        let counts = counts_for(vec![make_observation(
            0.9,
            Emotion::Neutral,
            Gesture::StandProperly,
        )]);
        let summary = synthesize(&counts);
        assert!(summary.eye.starts_with("Let's start with your eye contact. "));
        assert!(summary.emotion.starts_with("Moreover, "));
        assert!(summary.gesture.starts_with("Finally, about your gestures, "));
    }

    #[test]
    fn test_ratio_tier_boundaries() {
        // Exactly 0.5 falls in the middle tier, not the negative one
        assert_eq!(good_ratio(5, 10), 0.5);
        let counts = counts_for(
            (0..10)
                .map(|i| {
                    let eye = if i < 5 { 0.2 } else { 0.9 };
                    make_observation(eye, Emotion::Neutral, Gesture::StandProperly)
                })
                .collect(),
        );
        let summary = synthesize(&counts);
        assert!(summary.eye.contains("sufficient proportion"));

        // Exactly 0.9 falls in the positive tier
        let counts = counts_for(
            (0..10)
                .map(|i| {
                    let eye = if i < 1 { 0.2 } else { 0.9 };
                    make_observation(eye, Emotion::Neutral, Gesture::StandProperly)
                })
                .collect(),
        );
        let summary = synthesize(&counts);
        assert!(summary.eye.contains("too much eye contact"));
    }

    #[test]
    fn test_emotion_positive_tier_has_no_caveat() {
        let counts = counts_for(vec![make_observation(
            0.9,
            Emotion::Happiness,
            Gesture::StandProperly,
        )]);
        let summary = synthesize(&counts);
        assert!(summary.emotion.contains("excellent facial expression"));
        assert!(!summary.emotion.contains("too much"));
    }

    #[test]
    fn test_bad_top_ranking_and_tie_break() {
        let counts = counts_for(vec![
            make_observation(0.9, Emotion::Neutral, Gesture::TouchBody),
            make_observation(0.9, Emotion::Neutral, Gesture::CrossArms),
            make_observation(0.9, Emotion::Neutral, Gesture::TouchBody),
            make_observation(0.9, Emotion::Neutral, Gesture::Hold),
        ]);

        let ranked = bad_top(&counts);
        assert_eq!(ranked[0], (Gesture::TouchBody, 2));
        // cross_arms and hold tie at 1; the stable sort keeps taxonomy order
        assert_eq!(ranked[1], (Gesture::CrossArms, 1));
        assert_eq!(ranked[2], (Gesture::Hold, 1));
    }

    #[test]
    fn test_negative_tier_names_top_three_offenders() {
        let mut observations = Vec::new();
        for _ in 0..4 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::CrossArms));
        }
        for _ in 0..3 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::TouchBody));
        }
        for _ in 0..2 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Point));
        }
        observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Hold));

        let summary = synthesize(&counts_for(observations));
        assert!(summary.gesture.contains("crossing arms"));
        assert!(summary.gesture.contains("be fidgety"));
        assert!(summary.gesture.contains("pointing"));
        // Only the top three are named
        assert!(!summary.gesture.contains("hold something"));
    }

    #[test]
    fn test_mixed_tier_singular_phrasing() {
        // 1 bad out of 5 -> ratio 0.8, mixed tier, one offender
        let mut observations = vec![make_observation(0.9, Emotion::Neutral, Gesture::CrossArms)];
        for _ in 0..4 {
            observations.push(make_observation(
                0.9,
                Emotion::Neutral,
                Gesture::StandProperly,
            ));
        }

        let summary = synthesize(&counts_for(observations));
        assert!(summary.gesture.contains("doing great"));
        assert!(summary.gesture.contains("crossing arms"));
        assert!(!summary.gesture.contains(" and "));
    }

    #[test]
    fn test_overuse_caveat_single_entry() {
        // roll = 5 of 20 (share 0.25 > 0.12), everything else good
        let mut observations = Vec::new();
        for _ in 0..5 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Roll));
        }
        for _ in 0..15 {
            observations.push(make_observation(
                0.9,
                Emotion::Neutral,
                Gesture::StandProperly,
            ));
        }

        let counts = counts_for(observations);
        assert_eq!(good_top(&counts), vec![(Gesture::Roll, 5)]);

        let summary = synthesize(&counts);
        assert!(summary.gesture.contains("excellent work"));
        assert!(summary.gesture.contains("making the rolling hands too much"));
        assert!(!summary.gesture.contains("walking"));
    }

    #[test]
    fn test_overuse_caveat_dual_entry() {
        // roll = 4, move = 6 of 20; both above the 0.12 share
        let mut observations = Vec::new();
        for _ in 0..4 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Roll));
        }
        for _ in 0..6 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Move));
        }
        for _ in 0..10 {
            observations.push(make_observation(
                0.9,
                Emotion::Neutral,
                Gesture::StandProperly,
            ));
        }

        let counts = counts_for(observations);
        assert_eq!(good_top(&counts), vec![(Gesture::Move, 6), (Gesture::Roll, 4)]);

        let summary = synthesize(&counts);
        assert!(summary
            .gesture
            .contains("making the walking and rolling hands too much"));
    }

    #[test]
    fn test_overuse_share_is_strict() {
        // move = 3 of 25 gives a share of exactly 0.12, which is not overuse
        let mut observations = Vec::new();
        for _ in 0..3 {
            observations.push(make_observation(0.9, Emotion::Neutral, Gesture::Move));
        }
        for _ in 0..22 {
            observations.push(make_observation(
                0.9,
                Emotion::Neutral,
                Gesture::StandProperly,
            ));
        }

        let counts = counts_for(observations);
        assert!(good_top(&counts).is_empty());
    }

    // Counts with bad gestures recorded but no per-label frequencies; the
    // sub-0.9 tiers must fall back to generic text instead of indexing an
    // empty ranking
    fn counts_without_offenders(total: u32, bad_gesture: u32) -> SessionCounts {
        SessionCounts {
            total,
            bad_eye: 0,
            bad_emotion: 0,
            bad_gesture,
            eye_buckets: [0, total],
            emotion_counts: [0; 9],
            gesture_counts: [0; 18],
            eye_images: std::array::from_fn(|_| Vec::new()),
            emotion_images: std::array::from_fn(|_| Vec::new()),
            gesture_images: std::array::from_fn(|_| Vec::new()),
        }
    }

    #[test]
    fn test_negative_tier_fallback_when_no_offender_is_counted() {
        // ratio 0.4: negative tier
        let counts = counts_without_offenders(10, 6);
        assert!(bad_top(&counts).is_empty());

        let summary = synthesize(&counts);
        assert!(summary.gesture.contains("posture open and relaxed"));
        assert!(!summary.gesture.contains("you mostly did"));
        for gesture in Gesture::ALL {
            let name = gesture.display_name().to_lowercase();
            assert!(!summary.gesture.contains(&name));
        }
    }

    #[test]
    fn test_mixed_tier_fallback_when_no_offender_is_counted() {
        // ratio 0.8: mixed tier
        let counts = counts_without_offenders(10, 2);
        assert!(bad_top(&counts).is_empty());

        let summary = synthesize(&counts);
        assert!(summary.gesture.contains("doing great"));
        assert!(summary.gesture.contains("came across as tense"));
        assert!(!summary.gesture.contains("such as"));
        for gesture in Gesture::ALL {
            let name = gesture.display_name().to_lowercase();
            assert!(!summary.gesture.contains(&name));
        }
    }

    #[test]
    fn test_clean_session_gets_encouragement() {
        let counts = counts_for(vec![
            make_observation(0.9, Emotion::Neutral, Gesture::StandProperly),
            make_observation(0.9, Emotion::Neutral, Gesture::OpenTwoArms),
        ]);
        let summary = synthesize(&counts);
        assert!(summary.gesture.contains("keep going in this direction"));
    }

    #[test]
    fn test_good_top_only_considers_roll_and_move() {
        // open_two_arms dominates but is not an overuse candidate
        let mut observations = Vec::new();
        for _ in 0..10 {
            observations.push(make_observation(
                0.9,
                Emotion::Neutral,
                Gesture::OpenTwoArms,
            ));
        }
        let counts = counts_for(observations);
        assert!(good_top(&counts).is_empty());
    }
}
