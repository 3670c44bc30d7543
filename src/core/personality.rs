use crate::core::dimensions::{Axis, DimensionMap, MAX_POLE_SCORE};

/// Largest possible sum of per-axis distances
const MAX_TOTAL_DISTANCE: u32 = MAX_POLE_SCORE as u32 * Axis::ALL.len() as u32;

/// Sum of absolute differences on the primary pole of every axis (0-400)
///
/// Comparing the opposite pole would give the same distance since both poles
/// of an axis sum to 100.
#[inline]
pub fn total_distance(user_map: &DimensionMap, other_map: &DimensionMap) -> u32 {
    Axis::ALL
        .iter()
        .map(|axis| {
            let pole = axis.primary();
            u32::from(user_map.score(pole).abs_diff(other_map.score(pole)))
        })
        .sum()
}

/// Personality similarity between two users (0-100)
///
/// `round((1 - distance / 400) * 100)`, computed in integers with halves
/// rounded up. Identical maps score 100, fully inverted maps score 0.
pub fn personality_score(user_map: &DimensionMap, other_map: &DimensionMap) -> u8 {
    let remaining = MAX_TOTAL_DISTANCE.saturating_sub(total_distance(user_map, other_map));
    let score = (remaining * 100 + MAX_TOTAL_DISTANCE / 2) / MAX_TOTAL_DISTANCE;

    // remaining <= MAX_TOTAL_DISTANCE, so score <= 100
    score as u8
}
