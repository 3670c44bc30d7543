use crate::models::ScoringWeights;

/// Express `count` as a percentage of the acting user's own `total`
///
/// A user who selected nothing cannot be matched on that axis, so a zero
/// `total` yields exactly 0 rather than a division by zero.
#[inline]
pub fn normalize_count(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 / total as f64 * 100.0
}

/// Primary ranking score:
/// score = round(
///     personality * 0.5 +
///     interests   * 0.3 +          # normalized shared interests
///     tags        * 0.2            # normalized shared tags
/// )
#[inline]
pub fn combined_score(personality: u8, normalized_interest: f64, normalized_tag: f64) -> u8 {
    weighted_percent(
        &ScoringWeights::COMBINED,
        f64::from(personality),
        normalized_interest,
        normalized_tag,
    )
}

/// Secondary composite used only by the interests ranking:
/// score = round(interests * 0.7 + tags * 0.3)
#[inline]
pub fn interest_and_tag_percent(normalized_interest: f64, normalized_tag: f64) -> u8 {
    weighted_percent(
        &ScoringWeights::INTEREST_AND_TAG,
        0.0,
        normalized_interest,
        normalized_tag,
    )
}

#[inline]
fn weighted_percent(weights: &ScoringWeights, personality: f64, interests: f64, tags: f64) -> u8 {
    let total = personality * weights.personality + interests * weights.interests + tags * weights.tags;

    total.round().clamp(0.0, 100.0) as u8
}
