//! Dice expansion, outcome enumeration, and die notation.

use crate::constants::NOTATION_JOINER;
use crate::error::DiceError;
use crate::types::{DiceSpec, DieGroup};

/// Flatten a spec into one face sequence `1..=sides` per individual die,
/// in group order.
pub fn expand_dice(spec: &DiceSpec) -> Vec<Vec<u32>> {
    spec.groups()
        .iter()
        .flat_map(|g| (0..g.count).map(move |_| (1..=g.sides).collect::<Vec<u32>>()))
        .collect()
}

/// Product of `sides^count` over all groups, or `None` on u64 overflow.
pub fn checked_total_outcomes(groups: &[DieGroup]) -> Option<u64> {
    groups.iter().try_fold(1u64, |acc, g| {
        (g.sides as u64)
            .checked_pow(g.count)
            .and_then(|n| acc.checked_mul(n))
    })
}

/// Cartesian product over per-die face sequences.
///
/// Yields one face assignment per outcome. The last die varies fastest, so
/// outcomes come out in lexicographic order of face indices.
pub struct Outcomes<'a> {
    dice: &'a [Vec<u32>],
    /// Current face index per die (odometer digits).
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Outcomes<'a> {
    pub fn new(dice: &'a [Vec<u32>]) -> Self {
        Self {
            dice,
            indices: vec![0; dice.len()],
            done: dice.iter().any(|faces| faces.is_empty()),
        }
    }

    /// Step the odometer. Returns false once every digit has wrapped.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.dice[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl Iterator for Outcomes<'_> {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        if self.done {
            return None;
        }
        let outcome = self
            .indices
            .iter()
            .zip(self.dice)
            .map(|(&i, faces)| faces[i])
            .collect();
        self.done = !self.advance();
        Some(outcome)
    }
}

/// Parse one `NdM` token. A missing count (`d6`) means one die.
pub fn parse_group(token: &str) -> Result<DieGroup, DiceError> {
    let invalid = || DiceError::InvalidNotation(token.to_string());
    let lower = token.trim().to_ascii_lowercase();
    let (count, sides) = lower.split_once('d').ok_or_else(invalid)?;
    let count = if count.is_empty() {
        1
    } else {
        count.parse::<u32>().map_err(|_| invalid())?
    };
    let sides = sides.parse::<u32>().map_err(|_| invalid())?;
    Ok(DieGroup::new(count, sides))
}

/// Parse a list of `NdM` tokens into a validated spec.
pub fn parse_notation<S: AsRef<str>>(tokens: &[S]) -> Result<DiceSpec, DiceError> {
    let groups = tokens
        .iter()
        .map(|t| parse_group(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    DiceSpec::new(groups)
}

/// "3d6", or "2d6 and 1d8 and 2d20" for several groups.
pub fn format_notation(groups: &[DieGroup]) -> String {
    groups
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(NOTATION_JOINER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_dice() {
        let spec = DiceSpec::from_pairs(&[(2, 3), (1, 2)]).unwrap();
        let dice = expand_dice(&spec);
        assert_eq!(dice, vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2]]);
    }

    #[test]
    fn test_checked_total_outcomes() {
        let groups = [DieGroup::new(2, 6), DieGroup::new(1, 8), DieGroup::new(2, 20)];
        assert_eq!(checked_total_outcomes(&groups), Some(115_200));
        assert_eq!(checked_total_outcomes(&[DieGroup::new(64, 2)]), None);
        assert_eq!(
            checked_total_outcomes(&[DieGroup::new(63, 2)]),
            Some(1u64 << 63)
        );
    }

    #[test]
    fn test_outcomes_order() {
        let dice = vec![vec![1, 2], vec![1, 2, 3]];
        let all: Vec<Vec<u32>> = Outcomes::new(&dice).collect();
        assert_eq!(
            all,
            vec![
                vec![1, 1],
                vec![1, 2],
                vec![1, 3],
                vec![2, 1],
                vec![2, 2],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_outcomes_degenerate() {
        let one_face = vec![vec![1], vec![1]];
        assert_eq!(Outcomes::new(&one_face).count(), 1);

        let empty_die = vec![vec![1, 2], vec![]];
        assert_eq!(Outcomes::new(&empty_die).count(), 0);
    }

    #[test]
    fn test_parse_group() {
        assert_eq!(parse_group("3d6").unwrap(), DieGroup::new(3, 6));
        assert_eq!(parse_group("d20").unwrap(), DieGroup::new(1, 20));
        assert_eq!(parse_group("2D8").unwrap(), DieGroup::new(2, 8));
        for bad in ["", "6", "3d", "xd6", "3d6d2", "3x6"] {
            assert_eq!(
                parse_group(bad),
                Err(DiceError::InvalidNotation(bad.to_string())),
                "token={bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_notation() {
        let spec = parse_notation(&["2d6", "1d8", "2d20"]).unwrap();
        assert_eq!(spec.total_outcomes(), 115_200);
        assert_eq!(
            parse_notation(&["0d6"]),
            Err(DiceError::ZeroCount { index: 0 })
        );
        assert_eq!(parse_notation::<&str>(&[]), Err(DiceError::EmptySpec));
    }

    #[test]
    fn test_format_notation() {
        assert_eq!(format_notation(&[DieGroup::new(3, 6)]), "3d6");
        assert_eq!(
            format_notation(&[DieGroup::new(2, 6), DieGroup::new(1, 8), DieGroup::new(2, 20)]),
            "2d6 and 1d8 and 2d20"
        );
    }
}
