use std::cmp::Reverse;
use thiserror::Error;

use crate::core::{
    commonality::{id_set, shared},
    dimensions::{normalize, DimensionError},
    personality::personality_score,
    scoring::{combined_score, interest_and_tag_percent, normalize_count},
};
use crate::models::{Commonalities, MatchDetails, MatchResults, MatchScores, MatchableUser};

/// Errors that abort a whole matching run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid personality data for user {user_id}: {source}")]
    InvalidDimensions {
        user_id: String,
        #[source]
        source: DimensionError,
    },
}

impl MatchError {
    fn invalid_dimensions(user: &MatchableUser, source: DimensionError) -> Self {
        MatchError::InvalidDimensions {
            user_id: user.user_id.clone(),
            source,
        }
    }
}

/// Rank every candidate against the acting user
///
/// # Pipeline Stages
/// 1. Normalize the acting user's dimensions (once per call)
/// 2. Per candidate: normalize, score personality, find shared interests/tags
/// 3. Combine sub-scores into `combined` and `interest_and_tag_percent`
/// 4. Stable-sort three copies of the result descending by `combined`,
///    `personality` and `interest_and_tag_percent`
///
/// No candidate is filtered out; exclusion is up to the caller. Any malformed
/// dimension data fails the whole batch.
pub fn calculate_matches<'a>(
    acting_user: &MatchableUser,
    candidates: &'a [MatchableUser],
) -> Result<MatchResults<'a>, MatchError> {
    let acting_map = normalize(&acting_user.dimensions)
        .map_err(|e| MatchError::invalid_dimensions(acting_user, e))?;

    let acting_interest_ids = id_set(&acting_user.interests);
    let acting_tag_ids = id_set(&acting_user.personality_tags);
    let interest_total = acting_user.interests.len();
    let tag_total = acting_user.personality_tags.len();

    let details = candidates
        .iter()
        .map(|candidate| -> Result<MatchDetails<'a>, MatchError> {
            let candidate_map = normalize(&candidate.dimensions)
                .map_err(|e| MatchError::invalid_dimensions(candidate, e))?;

            let personality = personality_score(&acting_map, &candidate_map);

            let shared_interests = shared(&acting_interest_ids, &candidate.interests);
            let shared_tags = shared(&acting_tag_ids, &candidate.personality_tags);

            let normalized_interest = normalize_count(shared_interests.len(), interest_total);
            let normalized_tag = normalize_count(shared_tags.len(), tag_total);

            Ok(MatchDetails {
                user: candidate,
                scores: MatchScores {
                    combined: combined_score(personality, normalized_interest, normalized_tag),
                    personality,
                    interest_count: shared_interests.len(),
                    tag_count: shared_tags.len(),
                    interest_and_tag_percent: interest_and_tag_percent(
                        normalized_interest,
                        normalized_tag,
                    ),
                },
                commonalities: Commonalities {
                    interests: shared_interests,
                    tags: shared_tags,
                },
            })
        })
        .collect::<Result<Vec<_>, MatchError>>()?;

    tracing::debug!(
        "Scored {} candidates for user {} (interests: {}, tags: {})",
        details.len(),
        acting_user.user_id,
        interest_total,
        tag_total
    );

    Ok(rank(details))
}

/// Produce the three rankings; `sort_by_key` is stable so ties keep input order
fn rank(details: Vec<MatchDetails<'_>>) -> MatchResults<'_> {
    let mut combined = details.clone();
    combined.sort_by_key(|d| Reverse(d.scores.combined));

    let mut personality = details.clone();
    personality.sort_by_key(|d| Reverse(d.scores.personality));

    let mut interests = details;
    interests.sort_by_key(|d| Reverse(d.scores.interest_and_tag_percent));

    MatchResults {
        combined,
        personality,
        interests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimensions::{Axis, Pole};
    use crate::models::{Interest, PersonalityDimensionObservation, PersonalityTag};

    fn create_user(
        id: &str,
        interest_ids: &[i64],
        tag_ids: &[i64],
        dimensions: &[(Axis, Pole, u8)],
    ) -> MatchableUser {
        MatchableUser {
            user_id: id.to_string(),
            name: format!("User {}", id),
            description: None,
            image_file_ids: vec![],
            interests: interest_ids
                .iter()
                .map(|&id| Interest {
                    id,
                    name: format!("Interest {}", id),
                    category_id: 1,
                })
                .collect(),
            personality_tags: tag_ids
                .iter()
                .map(|&id| PersonalityTag {
                    id,
                    name: format!("Tag {}", id),
                    category_id: 1,
                })
                .collect(),
            dimensions: dimensions
                .iter()
                .map(|&(axis, pole, score)| PersonalityDimensionObservation::new(axis, pole, score))
                .collect(),
        }
    }

    #[test]
    fn test_empty_candidates() {
        let me = create_user("me", &[1], &[1], &[]);
        let candidates: Vec<MatchableUser> = vec![];

        let results = calculate_matches(&me, &candidates).unwrap();

        assert!(results.is_empty());
        assert!(results.personality.is_empty());
        assert!(results.interests.is_empty());
    }

    #[test]
    fn test_every_candidate_in_every_list() {
        let me = create_user("me", &[1, 2], &[5], &[(Axis::Ei, Pole::I, 80)]);
        let candidates = vec![
            create_user("a", &[], &[], &[(Axis::Ei, Pole::E, 80)]),
            create_user("b", &[1, 2], &[5], &[]),
            create_user("c", &[2], &[], &[(Axis::Ei, Pole::I, 80)]),
        ];

        let results = calculate_matches(&me, &candidates).unwrap();

        assert_eq!(results.combined.len(), 3);
        assert_eq!(results.personality.len(), 3);
        assert_eq!(results.interests.len(), 3);
    }

    #[test]
    fn test_rankings_use_their_own_scores() {
        let me = create_user("me", &[1, 2], &[5], &[(Axis::Ei, Pole::I, 80)]);
        let candidates = vec![
            // same personality, nothing shared
            create_user("twin", &[], &[], &[(Axis::Ei, Pole::I, 80)]),
            // opposite personality, everything shared
            create_user("friendly", &[1, 2], &[5], &[(Axis::Ei, Pole::E, 80)]),
        ];

        let results = calculate_matches(&me, &candidates).unwrap();

        assert_eq!(results.personality[0].user.user_id, "twin");
        assert_eq!(results.interests[0].user.user_id, "friendly");
        assert_eq!(results.interests[0].scores.interest_and_tag_percent, 100);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let me = create_user("me", &[1], &[], &[]);
        let candidates = vec![
            create_user("first", &[1], &[], &[]),
            create_user("second", &[1], &[], &[]),
            create_user("third", &[1], &[], &[]),
        ];

        let results = calculate_matches(&me, &candidates).unwrap();

        for list in [&results.combined, &results.personality, &results.interests] {
            let ids: Vec<&str> = list.iter().map(|d| d.user.user_id.as_str()).collect();
            assert_eq!(ids, vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_commonalities_reported() {
        let me = create_user("me", &[1, 2, 3], &[7, 8], &[]);
        let candidates = vec![create_user("a", &[3, 4, 1], &[8, 9], &[])];

        let results = calculate_matches(&me, &candidates).unwrap();
        let details = &results.combined[0];

        let interest_ids: Vec<i64> = details.commonalities.interests.iter().map(|i| i.id).collect();
        let tag_ids: Vec<i64> = details.commonalities.tags.iter().map(|t| t.id).collect();
        assert_eq!(interest_ids, vec![3, 1]);
        assert_eq!(tag_ids, vec![8]);
        assert_eq!(details.scores.interest_count, 2);
        assert_eq!(details.scores.tag_count, 1);
    }

    #[test]
    fn test_acting_user_without_tags_gets_no_tag_credit() {
        let me = create_user("me", &[1], &[], &[]);
        let candidates = vec![create_user("a", &[1], &[1, 2, 3], &[])];

        let results = calculate_matches(&me, &candidates).unwrap();
        let scores = results.combined[0].scores;

        // personality 100 (both neutral), interests 100%, tags 0%
        assert_eq!(scores.tag_count, 0);
        assert_eq!(scores.combined, 80);
        assert_eq!(scores.interest_and_tag_percent, 70);
    }

    #[test]
    fn test_invalid_candidate_fails_whole_batch() {
        let me = create_user("me", &[1], &[], &[]);
        let candidates = vec![
            create_user("ok", &[1], &[], &[]),
            create_user("broken", &[], &[], &[(Axis::Sn, Pole::I, 60)]),
        ];

        let err = calculate_matches(&me, &candidates).unwrap_err();

        assert_eq!(
            err,
            MatchError::InvalidDimensions {
                user_id: "broken".to_string(),
                source: DimensionError::TraitNotOnAxis {
                    axis: Axis::Sn,
                    dominant_trait: Pole::I,
                },
            }
        );
    }

    #[test]
    fn test_invalid_acting_user_rejected() {
        let me = create_user("me", &[], &[], &[(Axis::Ei, Pole::I, 60), (Axis::Ei, Pole::I, 40)]);

        let err = calculate_matches(&me, &[]).unwrap_err();

        assert!(matches!(err, MatchError::InvalidDimensions { ref user_id, .. } if user_id == "me"));
    }
}
