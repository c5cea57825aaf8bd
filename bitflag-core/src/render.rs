//! Canonical string form of a flag set
//!
//! `<decimal value>(<label>|<label>...)`, labels in declaration order. A
//! value with no recognized bit renders as the literal `0()` even when
//! high bits make it nonzero. That loss is a known quirk and is kept.

use core::fmt;

use crate::flags::BitFlag;

impl fmt::Display for BitFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unrecognized() {
            return f.write_str("0()");
        }

        // Format the plain i64, never `self`, or this would recurse.
        write!(f, "{}(", self.bits())?;
        for (index, label) in self.labels().enumerate() {
            if index > 0 {
                f.write_str("|")?;
            }
            f.write_str(label)?;
        }
        f.write_str(")")
    }
}

/// Render a flag set to its canonical string
#[cfg(feature = "alloc")]
pub fn render(flag: BitFlag) -> alloc::string::String {
    use alloc::string::ToString;

    flag.to_string()
}

/// Render a raw integer, keeping any unknown bits
#[cfg(feature = "alloc")]
pub fn render_raw(bits: i64) -> alloc::string::String {
    render(BitFlag::from_bits_retain(bits))
}
