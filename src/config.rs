//! Runtime configuration assembled from CLI flags and environment

use std::env;
use std::ffi::OsStr;

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit ANSI colors in check output
    pub color: bool,
    /// Debug-level logging
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI flags. `NO_COLOR` in the environment also disables color.
    #[must_use]
    pub fn new(no_color: bool, verbose: bool) -> Self {
        Self {
            color: color_enabled(no_color, env::var_os("NO_COLOR").as_deref()),
            verbose,
        }
    }
}

/// Color is on unless the flag is set or `NO_COLOR` holds a non-empty value
fn color_enabled(no_color: bool, no_color_env: Option<&OsStr>) -> bool {
    !no_color && no_color_env.is_none_or(OsStr::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_enabled() {
        assert!(color_enabled(false, None));
        assert!(!color_enabled(true, None));
        assert!(!color_enabled(false, Some(OsStr::new("1"))));
        // empty NO_COLOR is ignored
        assert!(color_enabled(false, Some(OsStr::new(""))));
    }
}
