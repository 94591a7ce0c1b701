//! Error types for pair color conversions

use std::fmt;

/// Which half of a wire pair an error concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Major,
    Minor,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => f.write_str("major"),
            Self::Minor => f.write_str("minor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("pair number {pair_number} out of range ({axis} index)")]
    OutOfRange { axis: Axis, pair_number: i64 },

    #[error("unknown {axis} color: {color}")]
    ColorNotFound { axis: Axis, color: String },
}

impl Error {
    /// Axis that failed
    #[must_use]
    pub const fn axis(&self) -> Axis {
        match self {
            Self::OutOfRange { axis, .. } | Self::ColorNotFound { axis, .. } => *axis,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::OutOfRange {
            axis: Axis::Major,
            pair_number: 26,
        };
        assert_eq!(err.to_string(), "pair number 26 out of range (major index)");

        let err = Error::ColorNotFound {
            axis: Axis::Minor,
            color: "Pink".into(),
        };
        assert_eq!(err.to_string(), "unknown minor color: Pink");
        assert_eq!(err.axis(), Axis::Minor);
    }
}
