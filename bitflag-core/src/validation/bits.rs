//! Raw integer checks

use crate::error::FlagError;
use crate::flags::BitFlag;

/// Check that a raw value sets no bits outside the known members
pub const fn validate_bits(bits: i64) -> Result<(), FlagError> {
    if bits & !BitFlag::all().bits() != 0 {
        return Err(FlagError::UnknownBits(bits));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bits() {
        for bits in 0..8 {
            assert_eq!(validate_bits(bits), Ok(()));
        }

        assert_eq!(validate_bits(8), Err(FlagError::UnknownBits(8)));
        assert_eq!(validate_bits(13), Err(FlagError::UnknownBits(13)));
        assert_eq!(validate_bits(-1), Err(FlagError::UnknownBits(-1)));
        assert_eq!(
            validate_bits(i64::MIN),
            Err(FlagError::UnknownBits(i64::MIN))
        );
    }
}
