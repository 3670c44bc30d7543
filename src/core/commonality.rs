use std::collections::HashSet;

use crate::models::{Interest, PersonalityTag};

/// Something matched purely by identity
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Interest {
    #[inline]
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for PersonalityTag {
    #[inline]
    fn id(&self) -> i64 {
        self.id
    }
}

/// Collect the ids of a user's selections for O(1) membership checks
pub fn id_set<T: Identified>(items: &[T]) -> HashSet<i64> {
    items.iter().map(Identified::id).collect()
}

/// Items from `candidate_items` whose id the acting user also selected
///
/// Keeps the candidate's order and performs no deduplication of its own.
pub fn shared<'a, T: Identified>(acting_ids: &HashSet<i64>, candidate_items: &'a [T]) -> Vec<&'a T> {
    candidate_items
        .iter()
        .filter(|item| acting_ids.contains(&item.id()))
        .collect()
}
