//! Validation and parsing for inbound flag values
//!
//! Pure functions over strings and integers with no I/O dependencies.

pub mod bits;
pub mod parsing;

pub use bits::validate_bits;
pub use parsing::{parse_bits, parse_rendered};
