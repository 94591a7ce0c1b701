//! Self-check harness - runs known-good fixtures against both conversions

use crate::code::{colors_from_pair_number, pair_number_from_colors};
use std::fmt;

/// A known-good conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Pair number should map to these colors
    NumberToColors {
        number: i64,
        major: &'static str,
        minor: &'static str,
    },
    /// Colors should map to this pair number
    ColorsToNumber {
        major: &'static str,
        minor: &'static str,
        number: u8,
    },
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberToColors {
                number,
                major,
                minor,
            } => write!(f, "{number} -> {major} {minor}"),
            Self::ColorsToNumber {
                major,
                minor,
                number,
            } => write!(f, "{major} {minor} -> {number}"),
        }
    }
}

/// Fixtures covering the start, middle and end of the code
pub const FIXTURES: [Fixture; 5] = [
    Fixture::NumberToColors {
        number: 4,
        major: "White",
        minor: "Brown",
    },
    Fixture::NumberToColors {
        number: 5,
        major: "White",
        minor: "Slate",
    },
    Fixture::ColorsToNumber {
        major: "Black",
        minor: "Orange",
        number: 12,
    },
    Fixture::ColorsToNumber {
        major: "Violet",
        minor: "Slate",
        number: 25,
    },
    Fixture::ColorsToNumber {
        major: "Red",
        minor: "Orange",
        number: 7,
    },
];

/// Result of running one fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub fixture: Fixture,
    /// Why it failed, `None` on pass
    pub failure: Option<String>,
}

impl Outcome {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl Fixture {
    /// Run the conversion and compare against the expected value
    #[must_use]
    pub fn run(self) -> Outcome {
        let failure = match self {
            Self::NumberToColors {
                number,
                major,
                minor,
            } => match colors_from_pair_number(number) {
                Ok(pair) if pair.colors() == (major, minor) => None,
                Ok(pair) => Some(format!("expected {major} {minor}, got {pair}")),
                Err(e) => Some(e.to_string()),
            },
            Self::ColorsToNumber {
                major,
                minor,
                number,
            } => match pair_number_from_colors(major, minor) {
                Ok(got) if got == number => None,
                Ok(got) => Some(format!("expected {number}, got {got}")),
                Err(e) => Some(e.to_string()),
            },
        };

        if let Some(reason) = &failure {
            tracing::debug!(fixture = %self, %reason, "fixture failed");
        } else {
            tracing::debug!(fixture = %self, "fixture passed");
        }

        Outcome {
            fixture: self,
            failure,
        }
    }
}

/// Run every fixture in order
#[must_use]
pub fn run(fixtures: &[Fixture]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = fixtures.iter().copied().map(Fixture::run).collect();
    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    tracing::info!(total = outcomes.len(), failed, "self-check finished");
    outcomes
}

/// Run the built-in fixtures
#[must_use]
pub fn run_all() -> Vec<Outcome> {
    run(&FIXTURES)
}
