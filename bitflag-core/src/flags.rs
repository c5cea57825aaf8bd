//! The flag set type
//!
//! `BitFlag` packs the three members into a signed 64-bit integer. Any
//! integer is representable; only bits 0-2 carry meaning and the rest are
//! carried along untouched.

use crate::error::FlagError;
use crate::members::MEMBERS;

bitflags::bitflags! {
    /// A combination of zero or more named members
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct BitFlag: i64 {
        /// Bit 0
        const ACTIVE = 1;
        /// Bit 1
        const SEND = 2;
        /// Bit 2
        const RECEIVE = 4;
    }
}

impl BitFlag {
    /// Union of two flag sets, same as `a | b`
    pub const fn combine(self, other: Self) -> Self {
        self.union(other)
    }

    /// True when no known member bit is set
    ///
    /// Zero is unrecognized, and so is any value made only of high bits.
    pub const fn is_unrecognized(self) -> bool {
        !self.intersects(Self::all())
    }

    /// Only the bits that belong to known members
    pub const fn recognized(self) -> Self {
        self.intersection(Self::all())
    }

    /// Labels of the members present, in declaration order
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        MEMBERS
            .iter()
            .filter(move |(_, member)| self.contains(*member))
            .map(|(label, _)| *label)
    }
}

impl From<BitFlag> for i64 {
    fn from(flag: BitFlag) -> Self {
        flag.bits()
    }
}

/// Strict conversion: unknown bits are an error
impl TryFrom<i64> for BitFlag {
    type Error = FlagError;

    fn try_from(bits: i64) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(FlagError::UnknownBits(bits))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitFlag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitFlag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <i64 as serde::Deserialize>::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
