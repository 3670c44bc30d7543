use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::PersonalityDimensionObservation;

/// Score assigned to both poles of an axis the user never answered
pub const NEUTRAL_SCORE: u8 = 50;

/// Upper bound of a pole score; the two poles of an axis always sum to this
pub const MAX_POLE_SCORE: u8 = 100;

/// Errors raised for malformed personality observations
///
/// These are input-contract violations. They are never repaired silently
/// because they would corrupt the similarity math for every pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("axis {axis} observed more than once")]
    DuplicateAxis { axis: Axis },

    #[error("trait {dominant_trait} is not a pole of axis {axis}")]
    TraitNotOnAxis { axis: Axis, dominant_trait: Pole },

    #[error("score {score} on axis {axis} exceeds 100")]
    ScoreOutOfRange { axis: Axis, score: u8 },
}

/// One of the four bipolar personality axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "EI")]
    Ei,
    #[serde(rename = "SN")]
    Sn,
    #[serde(rename = "TF")]
    Tf,
    #[serde(rename = "JP")]
    Jp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Ei, Axis::Sn, Axis::Tf, Axis::Jp];

    /// The axis's two poles in canonical order; the first is the primary pole
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Axis::Ei => (Pole::I, Pole::E),
            Axis::Sn => (Pole::S, Pole::N),
            Axis::Tf => (Pole::T, Pole::F),
            Axis::Jp => (Pole::J, Pole::P),
        }
    }

    /// Representative pole used when comparing two users on this axis
    pub const fn primary(self) -> Pole {
        self.poles().0
    }

    pub const fn code(self) -> &'static str {
        match self {
            Axis::Ei => "EI",
            Axis::Sn => "SN",
            Axis::Tf => "TF",
            Axis::Jp => "JP",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One end of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    I,
    E,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    pub const ALL: [Pole; 8] = [
        Pole::I,
        Pole::E,
        Pole::S,
        Pole::N,
        Pole::T,
        Pole::F,
        Pole::J,
        Pole::P,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            Pole::I | Pole::E => Axis::Ei,
            Pole::S | Pole::N => Axis::Sn,
            Pole::T | Pole::F => Axis::Tf,
            Pole::J | Pole::P => Axis::Jp,
        }
    }

    /// The opposing pole on the same axis
    pub const fn opposite(self) -> Pole {
        match self {
            Pole::I => Pole::E,
            Pole::E => Pole::I,
            Pole::S => Pole::N,
            Pole::N => Pole::S,
            Pole::T => Pole::F,
            Pole::F => Pole::T,
            Pole::J => Pole::P,
            Pole::P => Pole::J,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Pole::I => "I",
            Pole::E => "E",
            Pole::S => "S",
            Pole::N => "N",
            Pole::T => "T",
            Pole::F => "F",
            Pole::J => "J",
            Pole::P => "P",
        };
        f.write_str(letter)
    }
}

/// Dense per-pole scores for one user
///
/// Every axis is present and its two poles sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionMap {
    scores: [u8; 8],
}

impl DimensionMap {
    /// A map with every axis at the neutral midpoint
    pub const fn neutral() -> Self {
        Self {
            scores: [NEUTRAL_SCORE; 8],
        }
    }

    #[inline]
    pub const fn score(&self, pole: Pole) -> u8 {
        self.scores[pole.index()]
    }

    /// Iterate `(pole, score)` pairs in canonical pole order
    pub fn iter(&self) -> impl Iterator<Item = (Pole, u8)> + '_ {
        Pole::ALL.into_iter().map(move |pole| (pole, self.score(pole)))
    }

    /// Set `pole` to `score` and its opposite to the remainder
    fn set(&mut self, pole: Pole, score: u8) {
        self.scores[pole.index()] = score;
        self.scores[pole.opposite().index()] = MAX_POLE_SCORE - score;
    }
}

impl Default for DimensionMap {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Convert sparse per-axis observations into a dense [`DimensionMap`]
///
/// Missing axes default to 50/50. Duplicate axes, traits that do not belong
/// to the observed axis and scores above 100 are rejected.
pub fn normalize(
    observations: &[PersonalityDimensionObservation],
) -> Result<DimensionMap, DimensionError> {
    let mut seen = [false; 4];
    let mut map = DimensionMap::neutral();

    for observation in observations {
        let axis = observation.dimension;

        if std::mem::replace(&mut seen[axis.index()], true) {
            return Err(DimensionError::DuplicateAxis { axis });
        }

        if observation.dominant_trait.axis() != axis {
            return Err(DimensionError::TraitNotOnAxis {
                axis,
                dominant_trait: observation.dominant_trait,
            });
        }

        if observation.score > MAX_POLE_SCORE {
            return Err(DimensionError::ScoreOutOfRange {
                axis,
                score: observation.score,
            });
        }

        map.set(observation.dominant_trait, observation.score);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(axis: Axis, pole: Pole, score: u8) -> PersonalityDimensionObservation {
        PersonalityDimensionObservation::new(axis, pole, score)
    }

    #[test]
    fn test_primary_dominant_trait() {
        let map = normalize(&[obs(Axis::Ei, Pole::I, 70)]).unwrap();

        assert_eq!(map.score(Pole::I), 70);
        assert_eq!(map.score(Pole::E), 30);
    }

    #[test]
    fn test_secondary_dominant_trait_is_mirrored() {
        let map = normalize(&[obs(Axis::Sn, Pole::N, 80)]).unwrap();

        assert_eq!(map.score(Pole::N), 80);
        assert_eq!(map.score(Pole::S), 20);
    }

    #[test]
    fn test_missing_axes_default_to_neutral() {
        let map = normalize(&[obs(Axis::Tf, Pole::F, 90)]).unwrap();

        for pole in [Pole::I, Pole::E, Pole::S, Pole::N, Pole::J, Pole::P] {
            assert_eq!(map.score(pole), NEUTRAL_SCORE, "pole {}", pole);
        }
        assert_eq!(map.score(Pole::T), 10);
    }

    #[test]
    fn test_empty_observations() {
        assert_eq!(normalize(&[]).unwrap(), DimensionMap::neutral());
    }

    #[test]
    fn test_map_has_eight_entries_summing_per_axis() {
        let map = normalize(&[
            obs(Axis::Ei, Pole::E, 100),
            obs(Axis::Sn, Pole::S, 0),
            obs(Axis::Jp, Pole::P, 63),
        ])
        .unwrap();

        assert_eq!(map.iter().count(), 8);
        for axis in Axis::ALL {
            let (a, b) = axis.poles();
            assert_eq!(map.score(a) + map.score(b), 100, "axis {}", axis);
        }
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        let err = normalize(&[obs(Axis::Ei, Pole::I, 70), obs(Axis::Ei, Pole::E, 20)]).unwrap_err();

        assert_eq!(err, DimensionError::DuplicateAxis { axis: Axis::Ei });
    }

    #[test]
    fn test_trait_from_other_axis_rejected() {
        let err = normalize(&[obs(Axis::Ei, Pole::S, 70)]).unwrap_err();

        assert_eq!(
            err,
            DimensionError::TraitNotOnAxis {
                axis: Axis::Ei,
                dominant_trait: Pole::S
            }
        );
    }

    #[test]
    fn test_score_above_range_rejected() {
        let err = normalize(&[obs(Axis::Jp, Pole::J, 101)]).unwrap_err();

        assert_eq!(err, DimensionError::ScoreOutOfRange { axis: Axis::Jp, score: 101 });
    }

    #[test]
    fn test_axis_serde_codes() {
        let observation: PersonalityDimensionObservation =
            serde_json::from_str(r#"{"dimension":"TF","dominantTrait":"F","score":55}"#).unwrap();

        assert_eq!(observation, obs(Axis::Tf, Pole::F, 55));
        assert!(serde_json::from_str::<Axis>(r#""XY""#).is_err());
    }
}
