//! Kindred Algo - compatibility matching engine for the Kindred meetup app
//!
//! Ranks candidate users against an acting user by personality similarity,
//! shared interests and shared personality tags, producing three
//! independently sorted lists.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_matches, normalize, personality_score, DimensionMap, MatchError};
pub use crate::models::{MatchDetails, MatchResults, MatchScores, MatchableUser};
