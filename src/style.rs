//! ANSI color codes for terminal output
//! Uses standard ANSI colors (0-15) so they adapt to terminal theme

pub const RESET: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m"; // Color 2: Green (passing check)
pub const RED: &str = "\x1b[31m"; // Color 1: Red (failing check)
pub const BRIGHT_BLACK: &str = "\x1b[90m"; // Bright black/gray (fixture detail)

/// Wrap `text` in `code` ... `RESET`, or return it unchanged when color is off
#[must_use]
pub fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(paint("ok", GREEN, true), "\x1b[32mok\x1b[0m");
        assert_eq!(paint("ok", GREEN, false), "ok");
    }
}
