//! Error types for flag set parsing and conversion

/// Errors that can occur when turning text or raw integers into a `BitFlag`
///
/// Rendering and combining never fail; only the inbound direction does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    /// Input string was empty
    Empty,
    /// Rendered form is missing its `(` or trailing `)`
    MissingParenthesis,
    /// Numeric part could not be parsed as a signed 64-bit integer
    InvalidNumber,
    /// A label inside the parentheses is not a member name
    UnknownLabel,
    /// Labels are repeated or out of declaration order
    LabelOrder,
    /// Labels do not agree with the recognized bits of the value
    LabelMismatch,
    /// Value sets bits outside the known members
    UnknownBits(i64),
}

impl core::fmt::Display for FlagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagError::Empty => write!(f, "Empty input"),
            FlagError::MissingParenthesis => write!(f, "Missing parenthesis in rendered flags"),
            FlagError::InvalidNumber => write!(f, "Invalid flag value"),
            FlagError::UnknownLabel => write!(f, "Unknown flag label"),
            FlagError::LabelOrder => write!(f, "Flag labels repeated or out of order"),
            FlagError::LabelMismatch => write!(f, "Flag labels do not match value"),
            FlagError::UnknownBits(bits) => write!(f, "Value {bits} sets unknown flag bits"),
        }
    }
}

impl core::error::Error for FlagError {}

/// Result type for flag operations
pub type Result<T> = core::result::Result<T, FlagError>;
