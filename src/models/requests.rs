use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchableUser;

/// Request to rank a candidate population against the acting user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateMatchesRequest {
    #[validate(nested)]
    pub user: MatchableUser,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<MatchableUser>,
    /// Friends, pending requests and anyone else the caller wants left out
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds", default)]
    pub exclude_user_ids: Vec<String>,
}
