use std::collections::HashSet;

use crate::models::MatchableUser;

/// Check whether a candidate may be ranked for the acting user
///
/// Excludes the acting user themself and anyone the caller already relates
/// to them (friends, pending requests). This runs before scoring; the engine
/// itself never drops candidates.
#[inline]
pub fn is_eligible(
    candidate: &MatchableUser,
    acting_user_id: &str,
    excluded_user_ids: &HashSet<&str>,
) -> bool {
    if candidate.user_id == acting_user_id {
        return false;
    }

    !excluded_user_ids.contains(candidate.user_id.as_str())
}

/// Drop ineligible candidates in place, keeping the order of the rest
pub fn retain_eligible(
    candidates: &mut Vec<MatchableUser>,
    acting_user_id: &str,
    excluded_user_ids: &[String],
) {
    let excluded: HashSet<&str> = excluded_user_ids.iter().map(String::as_str).collect();
    candidates.retain(|candidate| is_eligible(candidate, acting_user_id, &excluded));
}
