//! Ordered member table
//!
//! Declaration order lives here and nowhere else: rendering walks this
//! table front to back, and parsing uses the table index to check order.

use crate::flags::BitFlag;

/// Every member as `(label, value)` in declaration order
pub static MEMBERS: [(&str, BitFlag); 3] = [
    ("Active", BitFlag::ACTIVE),
    ("Send", BitFlag::SEND),
    ("Receive", BitFlag::RECEIVE),
];

/// Find a member by its exact rendered label
///
/// Returns the table position along with the member value.
pub fn lookup_label(label: &str) -> Option<(usize, BitFlag)> {
    MEMBERS
        .iter()
        .position(|(name, _)| *name == label)
        .map(|index| (index, MEMBERS[index].1))
}

/// Find a member by name, ignoring ASCII case
pub fn lookup_name(name: &str) -> Option<BitFlag> {
    MEMBERS
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(name))
        .map(|(_, member)| *member)
}
