//! pair-color - 25-pair telecom color code conversions

pub mod check;
pub mod code;
pub mod config;
pub mod error;
pub mod logger;
pub mod manual;
pub mod style;

pub use code::{
    MAJOR_COLORS, MINOR_COLORS, PAIR_COUNT, Pair, colors_from_pair_number, pair_number_from_colors,
};
pub use error::{Axis, Error, Result};
