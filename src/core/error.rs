use thiserror::Error;

/// Errors that can occur while calculating a check digit.
///
/// `is_valid` never surfaces these; every failure there reads as "not valid".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CheckDigitError {
    /// The code is empty or only whitespace.
    #[error("code is missing")]
    MissingCode,

    /// A character outside the accepted alphabet for its position.
    /// `position` is 1-based from the left.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The weighted sum (or numeric value) of the code body is zero.
    #[error("invalid code, sum is zero")]
    ZeroSum,

    /// The code has a length the routine cannot process.
    #[error("invalid code length {length}")]
    InvalidLength { length: usize },

    /// No VAT routine is registered for the country prefix.
    #[error("no check digit routine for country code '{0}'")]
    InvalidCountryCode(String),

    /// The computed value has no rendering as a check digit.
    #[error("unsupported check digit value {0}")]
    UnsupportedCheckDigitValue(u64),

    /// An embedded birth date does not exist in the calendar.
    #[error("invalid embedded date {0}")]
    InvalidDate(String),

    /// The code breaks a structural rule of its scheme.
    #[error("invalid code: {0}")]
    Malformed(&'static str),
}

impl CheckDigitError {
    /// Shorthand for [`CheckDigitError::InvalidCharacter`] with a 0-based index.
    pub(crate) fn invalid_char(index: usize, character: char) -> Self {
        Self::InvalidCharacter {
            position: index + 1,
            character,
        }
    }
}
