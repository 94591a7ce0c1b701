//! Printable reference manual for field technicians

use crate::code::{self, Pair};
use crate::error::Result;

const TITLE: &str = "Color Coding Reference Manual";
const COLUMNS: &str = "Pair Number | Major Color | Minor Color";
const RULE_WIDTH: usize = 30;

/// Format all 25 pairs as a table: title, rule, column header, rule, then one row per pair
pub fn format_reference_manual() -> Result<String> {
    let mut manual = String::new();
    manual.push_str(TITLE);
    manual.push('\n');
    manual.push_str(&"=".repeat(RULE_WIDTH));
    manual.push('\n');
    manual.push_str(COLUMNS);
    manual.push('\n');
    manual.push_str(&"-".repeat(RULE_WIDTH));
    manual.push('\n');

    for pair in code::pairs() {
        manual.push_str(&format_row(&pair?));
        manual.push('\n');
    }

    Ok(manual)
}

/// Single table row, aligned under the column header
#[must_use]
pub fn format_row(pair: &Pair) -> String {
    format!("{:2}          | {:<11} | {}", pair.number, pair.major, pair.minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::colors_from_pair_number;

    #[test]
    fn test_layout() {
        let manual = format_reference_manual().unwrap();
        let lines: Vec<&str> = manual.lines().collect();

        assert_eq!(lines.len(), 4 + 25);
        assert_eq!(lines[0], "Color Coding Reference Manual");
        assert_eq!(lines[1], "=".repeat(30));
        assert_eq!(lines[2], "Pair Number | Major Color | Minor Color");
        assert_eq!(lines[3], "-".repeat(30));
        assert_eq!(lines[4], " 1          | White       | Blue");
        assert_eq!(lines[28], "25          | Violet      | Slate");
        assert!(manual.ends_with('\n'));
    }

    #[test]
    fn test_rows_in_order() {
        let manual = format_reference_manual().unwrap();
        for (i, line) in manual.lines().skip(4).enumerate() {
            let number: u8 = line.split('|').next().unwrap().trim().parse().unwrap();
            assert_eq!(usize::from(number), i + 1);
        }
    }

    #[test]
    fn test_format_row() {
        let pair = colors_from_pair_number(12).unwrap();
        assert_eq!(format_row(&pair), "12          | Black       | Orange");
    }
}
