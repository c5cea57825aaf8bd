//! Parsing of rendered flag strings and raw integer literals

use core::str::FromStr;

use crate::error::FlagError;
use crate::flags::BitFlag;
use crate::members::lookup_label;

/// Parse the canonical rendered form back into a flag set
///
/// Accepts exactly what `Display` produces: `0()` or
/// `<decimal>(<label>|...)` with labels in declaration order and in
/// agreement with the value's recognized bits. High bits in the value are
/// kept. Since every unrecognized-only value renders as `0()`, parsing
/// `0()` can only give back the empty set.
pub fn parse_rendered(text: &str) -> Result<BitFlag, FlagError> {
    if text.is_empty() {
        return Err(FlagError::Empty);
    }

    if text == "0()" {
        return Ok(BitFlag::empty());
    }

    let open = text.find('(').ok_or(FlagError::MissingParenthesis)?;
    let inner = text[open + 1..]
        .strip_suffix(')')
        .ok_or(FlagError::MissingParenthesis)?;

    let value = &text[..open];
    if !is_canonical_decimal(value) {
        return Err(FlagError::InvalidNumber);
    }
    let bits = value.parse::<i64>().map_err(|_| FlagError::InvalidNumber)?;

    // Anything other than the literal "0()" must name at least one member
    if inner.is_empty() {
        return Err(FlagError::LabelMismatch);
    }

    let mut labelled = BitFlag::empty();
    let mut previous: Option<usize> = None;

    for label in inner.split('|') {
        let (index, member) = lookup_label(label).ok_or(FlagError::UnknownLabel)?;

        if previous.is_some_and(|prev| index <= prev) {
            return Err(FlagError::LabelOrder);
        }

        previous = Some(index);
        labelled = labelled.combine(member);
    }

    let flag = BitFlag::from_bits_retain(bits);
    if flag.recognized() != labelled {
        return Err(FlagError::LabelMismatch);
    }

    Ok(flag)
}

/// Decimal exactly as `i64` formats it: optional `-`, no `+`, no leading zeros
fn is_canonical_decimal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if digits.starts_with('0') {
        return value == "0";
    }

    true
}

/// Parse a raw integer literal: decimal, `0x` hex or `0b` binary
///
/// A leading `-` is allowed in every base. Prefixed literals are read as
/// magnitudes so `-0x8000000000000000` reaches `i64::MIN`.
pub fn parse_bits(text: &str) -> Result<i64, FlagError> {
    if text.is_empty() {
        return Err(FlagError::Empty);
    }

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = if let Some(hex) = strip_prefix_ignore_case(body, "0x") {
        (16, hex)
    } else if let Some(bin) = strip_prefix_ignore_case(body, "0b") {
        (2, bin)
    } else {
        return text.parse::<i64>().map_err(|_| FlagError::InvalidNumber);
    };

    // from_str_radix tolerates a sign; after a prefix it is not allowed
    if !digits.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric()) {
        return Err(FlagError::InvalidNumber);
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| FlagError::InvalidNumber)?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or(FlagError::InvalidNumber)
    } else {
        i64::try_from(magnitude).map_err(|_| FlagError::InvalidNumber)
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

impl FromStr for BitFlag {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rendered(s)
    }
}
