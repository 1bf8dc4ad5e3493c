//! The fixed questionnaire catalog.
//!
//! 23 items tagged with their PERMA dimension, plus the advisory tips and
//! dimension captions shown alongside the scores. The catalog is a
//! compile-time constant; there is no dynamic authoring.

use crate::models::Dimension;

/// Lower bound of the agreement scale.
pub const SCALE_MIN: u8 = 1;

/// Upper bound of the agreement scale.
pub const SCALE_MAX: u8 = 7;

/// Default response when an answer is left blank.
pub const DEFAULT_RESPONSE: u8 = 4;

/// A single questionnaire item.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    /// The prompt shown to the respondent.
    pub prompt: &'static str,
    /// The dimension this item measures.
    pub dimension: Dimension,
}

const fn item(prompt: &'static str, dimension: Dimension) -> Item {
    Item { prompt, dimension }
}

/// The fixed, ordered item catalog: 5 x P, 5 x E, 4 x R, 4 x M, 5 x A,
/// grouped contiguously by dimension.
pub const ITEMS: [Item; 23] = [
    // P - Positive Emotion
    item(
        "Lately I have often felt cheerful or at ease.",
        Dimension::PositiveEmotion,
    ),
    item(
        "I generally feel optimistic.",
        Dimension::PositiveEmotion,
    ),
    item(
        "I take pleasure in small moments during the day.",
        Dimension::PositiveEmotion,
    ),
    item(
        "I notice the things I am grateful for.",
        Dimension::PositiveEmotion,
    ),
    item(
        "I can stay positive while coping with stress.",
        Dimension::PositiveEmotion,
    ),
    // E - Engagement
    item(
        "When busy with a task I often slip into flow (time flies).",
        Dimension::Engagement,
    ),
    item(
        "During the day there are activities I get completely absorbed in.",
        Dimension::Engagement,
    ),
    item(
        "I enjoy tasks that stretch my abilities.",
        Dimension::Engagement,
    ),
    item(
        "Focusing is usually easy for me.",
        Dimension::Engagement,
    ),
    item(
        "I feel eager when learning something new.",
        Dimension::Engagement,
    ),
    // R - Relationships
    item(
        "I spend quality time with the people I feel close to.",
        Dimension::Relationships,
    ),
    item(
        "There are people I can turn to for support when I struggle.",
        Dimension::Relationships,
    ),
    item(
        "I have meaningful social interactions in my daily life.",
        Dimension::Relationships,
    ),
    item(
        "My relationships give me energy.",
        Dimension::Relationships,
    ),
    // M - Meaning
    item(
        "I feel that what I do serves a larger purpose.",
        Dimension::Meaning,
    ),
    item(
        "I live in line with my values.",
        Dimension::Meaning,
    ),
    item(
        "I feel I belong to something bigger than myself.",
        Dimension::Meaning,
    ),
    item(
        "I sense a purpose that gives my life direction.",
        Dimension::Meaning,
    ),
    // A - Accomplishment
    item(
        "I set realistic goals and pursue them.",
        Dimension::Accomplishment,
    ),
    item(
        "I have accomplished meaningful things recently.",
        Dimension::Accomplishment,
    ),
    item(
        "I am good at planning my day and following through.",
        Dimension::Accomplishment,
    ),
    item(
        "I do not give up when I run into obstacles.",
        Dimension::Accomplishment,
    ),
    item(
        "When I feel stuck, I take a concrete step forward.",
        Dimension::Accomplishment,
    ),
];

/// Returns the advisory tip for a dimension.
///
/// Total over the closed enum; there is no missing-key case.
pub fn tip_for(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::PositiveEmotion => {
            "P: Note three small good moments at the end of each day."
        }
        Dimension::Engagement => {
            "E: Give one task 25 undistracted minutes; silence notifications."
        }
        Dimension::Relationships => {
            "R: Send someone a note of appreciation this week, or set up a coffee break."
        }
        Dimension::Meaning => {
            "M: Write down your values and match one weekly goal to one of them."
        }
        Dimension::Accomplishment => {
            "A: Pick one small finishable goal for next week and put it on your calendar."
        }
    }
}

/// Returns the short caption explaining what a dimension measures.
pub fn explanation_for(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::PositiveEmotion => {
            "Positive Emotion: how often you experience joy, calm, gratitude and similar feelings."
        }
        Dimension::Engagement => {
            "Engagement: absorption and flow, the moments when time seems to fly."
        }
        Dimension::Relationships => {
            "Relationships: social support, closeness and a sense of belonging."
        }
        Dimension::Meaning => {
            "Meaning: purpose and alignment between your life and your values."
        }
        Dimension::Accomplishment => {
            "Accomplishment: setting goals and feeling progress toward them."
        }
    }
}

/// Returns how many catalog items measure the given dimension.
#[allow(dead_code)] // Utility for catalog sanity checks
pub fn item_count_for(dimension: Dimension) -> usize {
    ITEMS.iter().filter(|i| i.dimension == dimension).count()
}
