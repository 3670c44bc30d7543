use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::dimensions::{Axis, Pole};

/// One answered axis of the four-axis personality test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonalityDimensionObservation {
    pub dimension: Axis,
    #[serde(rename = "dominantTrait", alias = "dominant_trait")]
    pub dominant_trait: Pole,
    /// Strength of the dominant trait, 0-100
    #[validate(range(max = 100))]
    pub score: u8,
}

impl PersonalityDimensionObservation {
    pub fn new(dimension: Axis, dominant_trait: Pole, score: u8) -> Self {
        Self {
            dimension,
            dominant_trait,
            score,
        }
    }
}

/// A selectable interest (e.g. "Hiking")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "categoryId", alias = "category_id")]
    pub category_id: i64,
}

/// A selectable personality tag (e.g. "Night owl")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTag {
    pub id: i64,
    pub name: String,
    #[serde(rename = "categoryId", alias = "category_id")]
    pub category_id: i64,
}

/// Profile bundle consumed by the matching engine, for both the acting user
/// and every candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MatchableUser {
    #[validate(length(min = 1))]
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageFileIds", alias = "image_file_ids", default)]
    pub image_file_ids: Vec<String>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(rename = "personalityTags", alias = "personality_tags", default)]
    pub personality_tags: Vec<PersonalityTag>,
    #[validate(length(max = 4), nested)]
    #[serde(default)]
    pub dimensions: Vec<PersonalityDimensionObservation>,
}

/// Per-candidate scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchScores {
    pub combined: u8,
    pub personality: u8,
    #[serde(rename = "interestCount")]
    pub interest_count: usize,
    #[serde(rename = "tagCount")]
    pub tag_count: usize,
    #[serde(rename = "interestAndTagPercent")]
    pub interest_and_tag_percent: u8,
}

/// Interests and tags a candidate shares with the acting user, in the
/// candidate's own order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commonalities<'a> {
    pub interests: Vec<&'a Interest>,
    pub tags: Vec<&'a PersonalityTag>,
}

/// Engine output for a single candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetails<'a> {
    pub user: &'a MatchableUser,
    pub scores: MatchScores,
    pub commonalities: Commonalities<'a>,
}

/// The same candidate population ranked three ways
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResults<'a> {
    /// Descending by `scores.combined`
    pub combined: Vec<MatchDetails<'a>>,
    /// Descending by `scores.personality`
    pub personality: Vec<MatchDetails<'a>>,
    /// Descending by `scores.interest_and_tag_percent`
    pub interests: Vec<MatchDetails<'a>>,
}

impl MatchResults<'_> {
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}

/// Fixed weights for the two composite scores
///
/// These are business constants and are intentionally not exposed through
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub personality: f64,
    pub interests: f64,
    pub tags: f64,
}

impl ScoringWeights {
    /// Weights for `scores.combined`
    pub const COMBINED: Self = Self {
        personality: 0.5,
        interests: 0.3,
        tags: 0.2,
    };

    /// Weights for `scores.interest_and_tag_percent`
    pub const INTEREST_AND_TAG: Self = Self {
        personality: 0.0,
        interests: 0.7,
        tags: 0.3,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::COMBINED
    }
}
