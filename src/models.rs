//! Data models for the PERMA assessment.
//!
//! This module contains the core data structures used throughout
//! the application for representing dimensions, responses, and profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five PERMA well-being dimensions.
///
/// Declaration order is the canonical order P, E, R, M, A; the derived
/// `Ord` follows it, so ordered maps iterate dimensions canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// P - joy, calm, gratitude and similar feelings.
    #[serde(rename = "P")]
    PositiveEmotion,
    /// E - absorption and flow.
    #[serde(rename = "E")]
    Engagement,
    /// R - social support, closeness, belonging.
    #[serde(rename = "R")]
    Relationships,
    /// M - purpose and alignment with values.
    #[serde(rename = "M")]
    Meaning,
    /// A - goals and a sense of progress.
    #[serde(rename = "A")]
    Accomplishment,
}

impl Dimension {
    /// All five dimensions in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::PositiveEmotion,
        Dimension::Engagement,
        Dimension::Relationships,
        Dimension::Meaning,
        Dimension::Accomplishment,
    ];

    /// Returns the single-letter code for the dimension.
    pub fn code(&self) -> char {
        match self {
            Dimension::PositiveEmotion => 'P',
            Dimension::Engagement => 'E',
            Dimension::Relationships => 'R',
            Dimension::Meaning => 'M',
            Dimension::Accomplishment => 'A',
        }
    }

    /// Returns the full dimension name.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::PositiveEmotion => "Positive Emotion",
            Dimension::Engagement => "Engagement",
            Dimension::Relationships => "Relationships",
            Dimension::Meaning => "Meaning",
            Dimension::Accomplishment => "Accomplishment",
        }
    }

    /// Looks up a dimension by its single-letter code.
    #[allow(dead_code)] // Utility for future answer formats keyed by code
    pub fn from_code(code: char) -> Option<Dimension> {
        match code.to_ascii_uppercase() {
            'P' => Some(Dimension::PositiveEmotion),
            'E' => Some(Dimension::Engagement),
            'R' => Some(Dimension::Relationships),
            'M' => Some(Dimension::Meaning),
            'A' => Some(Dimension::Accomplishment),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single answer to one questionnaire item.
///
/// The collector guarantees `value` is within the response scale; one
/// response exists per item and none outlive the current render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Index into the item catalog (0-based).
    pub item_index: usize,
    /// Rating on the 1-7 agreement scale.
    pub value: u8,
}

/// The computed mean for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// The dimension this score belongs to.
    pub dimension: Dimension,
    /// Arithmetic mean of the dimension's responses, in [1,7].
    pub mean: f64,
}

/// The complete scored profile for one submission.
///
/// All five dimension keys are always present. Profiles are derived,
/// read-only values; a new submission produces a new profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Per-dimension scores, keyed canonically.
    pub scores: BTreeMap<Dimension, DimensionScore>,
    /// Unweighted mean of the five dimension means.
    pub overall: f64,
}

impl Profile {
    /// Returns the mean for a dimension (0.0 if absent, which the fixed
    /// catalog makes unreachable).
    pub fn mean_of(&self, dimension: Dimension) -> f64 {
        self.scores.get(&dimension).map(|s| s.mean).unwrap_or(0.0)
    }

    /// Returns the lowest-scoring dimension.
    ///
    /// Ties break toward the first dimension in canonical order because the
    /// map iterates canonically and only a strictly smaller mean replaces
    /// the current minimum.
    pub fn lowest_dimension(&self) -> Dimension {
        let mut lowest = Dimension::PositiveEmotion;
        let mut lowest_mean = f64::INFINITY;

        for (dimension, score) in &self.scores {
            if score.mean < lowest_mean {
                lowest = *dimension;
                lowest_mean = score.mean;
            }
        }

        lowest
    }
}

/// Metadata about one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Date and time the assessment was scored.
    pub assessment_date: DateTime<Utc>,
    /// Number of items answered.
    pub items_answered: usize,
    /// Lower bound of the response scale.
    pub scale_min: u8,
    /// Upper bound of the response scale.
    pub scale_max: u8,
    /// Version of the tool that produced the report.
    pub tool_version: String,
}

/// The complete assessment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the run.
    pub metadata: ReportMetadata,
    /// The scored profile.
    pub profile: Profile,
    /// The lowest-scoring dimension.
    pub lowest: Dimension,
    /// Advisory tip for the lowest-scoring dimension.
    pub tip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_means(means: [f64; 5]) -> Profile {
        let scores: BTreeMap<Dimension, DimensionScore> = Dimension::ALL
            .iter()
            .zip(means.iter())
            .map(|(&dimension, &mean)| (dimension, DimensionScore { dimension, mean }))
            .collect();
        let overall = means.iter().sum::<f64>() / means.len() as f64;
        Profile { scores, overall }
    }

    #[test]
    fn test_canonical_order() {
        let codes: String = Dimension::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, "PERMA");

        // Derived Ord must follow declaration order.
        assert!(Dimension::PositiveEmotion < Dimension::Engagement);
        assert!(Dimension::Engagement < Dimension::Relationships);
        assert!(Dimension::Relationships < Dimension::Meaning);
        assert!(Dimension::Meaning < Dimension::Accomplishment);
    }

    #[test]
    fn test_from_code_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_code(dimension.code()), Some(dimension));
        }
        assert_eq!(Dimension::from_code('p'), Some(Dimension::PositiveEmotion));
        assert_eq!(Dimension::from_code('X'), None);
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::PositiveEmotion.to_string(), "Positive Emotion");
        assert_eq!(Dimension::Accomplishment.to_string(), "Accomplishment");
    }

    #[test]
    fn test_dimension_serde_uses_codes() {
        let json = serde_json::to_string(&Dimension::Relationships).unwrap();
        assert_eq!(json, "\"R\"");

        let parsed: Dimension = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(parsed, Dimension::Meaning);
    }

    #[test]
    fn test_profile_lowest_dimension() {
        let profile = profile_with_means([4.0, 3.0, 5.0, 2.5, 6.0]);
        assert_eq!(profile.lowest_dimension(), Dimension::Meaning);
    }

    #[test]
    fn test_profile_lowest_ties_break_canonically() {
        // All equal: P wins as the first dimension in canonical order.
        let profile = profile_with_means([4.0, 4.0, 4.0, 4.0, 4.0]);
        assert_eq!(profile.lowest_dimension(), Dimension::PositiveEmotion);

        // E, R, M, A tied at the minimum: E wins.
        let profile = profile_with_means([7.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(profile.lowest_dimension(), Dimension::Engagement);
    }

    #[test]
    fn test_profile_scores_serialize_with_code_keys() {
        let profile = profile_with_means([1.0, 2.0, 3.0, 4.0, 5.0]);
        let json = serde_json::to_string(&profile).unwrap();

        assert!(json.contains("\"P\""));
        assert!(json.contains("\"A\""));

        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
