//! 25-pair color code - maps pair numbers to major/minor color labels and back
//!
//! Pair numbers run 1..=25 in row-major order: the major color changes every
//! five pairs, the minor color cycles within each group.

use crate::error::{Axis, Error, Result};
use std::fmt;

/// Major colors, in code order
pub const MAJOR_COLORS: [&str; 5] = ["White", "Red", "Black", "Yellow", "Violet"];

/// Minor colors, in code order
pub const MINOR_COLORS: [&str; 5] = ["Blue", "Orange", "Green", "Brown", "Slate"];

/// Number of pairs in the code (5 x 5)
pub const PAIR_COUNT: u8 = 25;

/// A wire pair and its two-color label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub number: u8,
    pub major: &'static str,
    pub minor: &'static str,
}

impl Pair {
    /// `(major, minor)` names
    #[must_use]
    pub const fn colors(&self) -> (&'static str, &'static str) {
        (self.major, self.minor)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major, self.minor)
    }
}

/// Look up the colors for a pair number.
///
/// Anything outside `1..=25` (zero and negatives included) is rejected with
/// [`Error::OutOfRange`] on the major axis.
pub fn colors_from_pair_number(pair_number: i64) -> Result<Pair> {
    let out_of_range = |axis| Error::OutOfRange { axis, pair_number };

    let zero_based = pair_number
        .checked_sub(1)
        .and_then(|z| usize::try_from(z).ok())
        .filter(|&z| z < usize::from(PAIR_COUNT))
        .ok_or_else(|| out_of_range(Axis::Major))?;

    let major = MAJOR_COLORS
        .get(zero_based / MINOR_COLORS.len())
        .copied()
        .ok_or_else(|| out_of_range(Axis::Major))?;
    let minor = MINOR_COLORS
        .get(zero_based % MINOR_COLORS.len())
        .copied()
        .ok_or_else(|| out_of_range(Axis::Minor))?;

    Ok(Pair {
        number: to_pair_number(zero_based),
        major,
        minor,
    })
}

/// Look up the pair number for a major/minor color label.
///
/// Names match exactly (case-sensitive). The major color is checked first.
pub fn pair_number_from_colors(major: &str, minor: &str) -> Result<u8> {
    let major_index = position(&MAJOR_COLORS, major).ok_or_else(|| Error::ColorNotFound {
        axis: Axis::Major,
        color: major.to_string(),
    })?;
    let minor_index = position(&MINOR_COLORS, minor).ok_or_else(|| Error::ColorNotFound {
        axis: Axis::Minor,
        color: minor.to_string(),
    })?;

    Ok(to_pair_number(major_index * MINOR_COLORS.len() + minor_index))
}

/// All pairs in order, 1 through 25
pub fn pairs() -> impl Iterator<Item = Result<Pair>> {
    (1..=PAIR_COUNT).map(|n| colors_from_pair_number(i64::from(n)))
}

fn position(sequence: &[&str], color: &str) -> Option<usize> {
    sequence.iter().position(|&c| c == color)
}

// zero_based is always below PAIR_COUNT here
#[allow(clippy::cast_possible_truncation)]
const fn to_pair_number(zero_based: usize) -> u8 {
    zero_based as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_number_to_colors() {
        assert_eq!(colors_from_pair_number(1).unwrap().colors(), ("White", "Blue"));
        assert_eq!(colors_from_pair_number(4).unwrap().colors(), ("White", "Brown"));
        assert_eq!(colors_from_pair_number(5).unwrap().colors(), ("White", "Slate"));
        assert_eq!(colors_from_pair_number(6).unwrap().colors(), ("Red", "Blue"));
        assert_eq!(colors_from_pair_number(25).unwrap().colors(), ("Violet", "Slate"));
    }

    #[test]
    fn test_colors_to_number() {
        assert_eq!(pair_number_from_colors("Black", "Orange").unwrap(), 12);
        assert_eq!(pair_number_from_colors("Violet", "Slate").unwrap(), 25);
        assert_eq!(pair_number_from_colors("Red", "Orange").unwrap(), 7);
        assert_eq!(pair_number_from_colors("White", "Blue").unwrap(), 1);
    }

    #[test]
    fn test_out_of_range() {
        for n in [26, 0, -1, -5, i64::MIN, i64::MAX] {
            let err = colors_from_pair_number(n).unwrap_err();
            assert_eq!(
                err,
                Error::OutOfRange {
                    axis: Axis::Major,
                    pair_number: n
                }
            );
        }
    }

    #[test]
    fn test_unknown_colors() {
        let err = pair_number_from_colors("Pink", "Blue").unwrap_err();
        assert_eq!(
            err,
            Error::ColorNotFound {
                axis: Axis::Major,
                color: "Pink".into()
            }
        );

        let err = pair_number_from_colors("White", "Pink").unwrap_err();
        assert_eq!(
            err,
            Error::ColorNotFound {
                axis: Axis::Minor,
                color: "Pink".into()
            }
        );

        // major is reported first when both are bad
        let err = pair_number_from_colors("Pink", "Pink").unwrap_err();
        assert_eq!(err.axis(), Axis::Major);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(pair_number_from_colors("white", "Blue").is_err());
        assert!(pair_number_from_colors("White", "BLUE").is_err());
    }

    #[test]
    fn test_pairs_cover_product() {
        let all: Vec<Pair> = pairs().collect::<Result<_>>().unwrap();
        assert_eq!(all.len(), 25);

        let distinct: HashSet<_> = all.iter().map(Pair::colors).collect();
        assert_eq!(distinct.len(), 25);
        for major in MAJOR_COLORS {
            for minor in MINOR_COLORS {
                assert!(distinct.contains(&(major, minor)));
            }
        }
    }

    #[test]
    fn test_display() {
        let pair = colors_from_pair_number(12).unwrap();
        assert_eq!(pair.number, 12);
        assert_eq!(pair.to_string(), "Black Orange");
    }
}
