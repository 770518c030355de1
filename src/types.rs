use std::fmt;

use serde::Serialize;

use crate::dice_mechanics::{checked_total_outcomes, format_notation};
use crate::error::DiceError;

/// `count` identical dice, each with faces `1..=sides`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DieGroup {
    pub count: u32,
    pub sides: u32,
}

impl DieGroup {
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for DieGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl From<(u32, u32)> for DieGroup {
    fn from((count, sides): (u32, u32)) -> Self {
        Self { count, sides }
    }
}

/// Validated, non-empty ordered sequence of die groups.
///
/// Construction rejects empty specs, zero counts, zero sides, and outcome
/// spaces whose size does not fit in a `u64`. Everything downstream can
/// therefore assume at least one die with at least one face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSpec {
    groups: Vec<DieGroup>,
    total_outcomes: u64,
}

impl DiceSpec {
    pub fn new(groups: Vec<DieGroup>) -> Result<Self, DiceError> {
        if groups.is_empty() {
            return Err(DiceError::EmptySpec);
        }
        for (index, group) in groups.iter().enumerate() {
            if group.count == 0 {
                return Err(DiceError::ZeroCount { index });
            }
            if group.sides == 0 {
                return Err(DiceError::ZeroSides { index });
            }
        }
        let total_outcomes =
            checked_total_outcomes(&groups).ok_or_else(|| DiceError::OutcomeOverflow {
                notation: format_notation(&groups),
            })?;
        Ok(Self {
            groups,
            total_outcomes,
        })
    }

    /// `count` dice of `sides` faces.
    pub fn uniform(count: u32, sides: u32) -> Result<Self, DiceError> {
        Self::new(vec![DieGroup::new(count, sides)])
    }

    pub fn from_pairs(pairs: &[(u32, u32)]) -> Result<Self, DiceError> {
        Self::new(pairs.iter().copied().map(DieGroup::from).collect())
    }

    pub fn groups(&self) -> &[DieGroup] {
        &self.groups
    }

    /// Product of `sides^count` over all groups.
    pub fn total_outcomes(&self) -> u64 {
        self.total_outcomes
    }

    /// Number of individual dice (sum of group counts).
    pub fn dice_count(&self) -> u64 {
        self.groups.iter().map(|g| g.count as u64).sum()
    }

    /// Smallest reachable sum: every die shows 1.
    pub fn lowest(&self) -> u64 {
        self.dice_count()
    }

    /// Largest reachable sum: every die shows its top face.
    pub fn highest(&self) -> u64 {
        self.groups
            .iter()
            .map(|g| g.count as u64 * g.sides as u64)
            .sum()
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_notation(&self.groups))
    }
}

/// One achievable total with its occurrence count and probability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SumBucket {
    pub sum: u64,
    pub count: u64,
    pub probability: f64,
}

/// Direction applied after the sort key is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_validation() {
        assert_eq!(DiceSpec::new(vec![]), Err(DiceError::EmptySpec));
        assert_eq!(
            DiceSpec::from_pairs(&[(2, 6), (0, 8)]),
            Err(DiceError::ZeroCount { index: 1 })
        );
        assert_eq!(
            DiceSpec::from_pairs(&[(1, 0)]),
            Err(DiceError::ZeroSides { index: 0 })
        );
        assert!(matches!(
            DiceSpec::uniform(100, 6),
            Err(DiceError::OutcomeOverflow { .. })
        ));
    }

    #[test]
    fn test_spec_bounds() {
        let spec = DiceSpec::from_pairs(&[(2, 6), (1, 8), (2, 20)]).unwrap();
        assert_eq!(spec.dice_count(), 5);
        assert_eq!(spec.lowest(), 5);
        assert_eq!(spec.highest(), 60);
        assert_eq!(spec.total_outcomes(), 115_200);

        let spec = DiceSpec::uniform(3, 6).unwrap();
        assert_eq!(spec.lowest(), 3);
        assert_eq!(spec.highest(), 18);
        assert_eq!(spec.total_outcomes(), 216);
    }

    #[test]
    fn test_display() {
        assert_eq!(DieGroup::new(3, 6).to_string(), "3d6");
        let spec = DiceSpec::from_pairs(&[(2, 6), (1, 8), (2, 20)]).unwrap();
        assert_eq!(spec.to_string(), "2d6 and 1d8 and 2d20");
    }
}
