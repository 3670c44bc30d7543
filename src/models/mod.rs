// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Commonalities, Interest, MatchDetails, MatchResults, MatchScores, MatchableUser,
    PersonalityDimensionObservation, PersonalityTag, ScoringWeights,
};
pub use requests::CalculateMatchesRequest;
pub use responses::{CalculateMatchesResponse, ErrorResponse, HealthResponse};
