//! The [`CheckDigit`] capability and the small string helpers shared by all routines.

use super::error::CheckDigitError;

/// A check digit routine.
///
/// Routines are stateless values; a single `static` instance can be shared
/// across threads.
pub trait CheckDigit: Send + Sync {
    /// Calculate the check digit(s) for a code body that does not yet carry them.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError>;

    /// Check a full code including its check digit(s).
    fn is_valid(&self, code: &str) -> bool;
}

/// `true` for an empty or whitespace-only code.
pub(crate) fn is_blank(code: &str) -> bool {
    code.trim().is_empty()
}

/// Fail with [`CheckDigitError::MissingCode`] for blank input.
pub(crate) fn require_code(code: &str) -> Result<(), CheckDigitError> {
    if is_blank(code) {
        Err(CheckDigitError::MissingCode)
    } else {
        Ok(())
    }
}

/// `true` when the string is non-empty and consists only of `'0'`.
pub(crate) fn is_all_zero(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0')
}

/// Parse a plain run of ASCII digits. No sign, no whitespace.
pub(crate) fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Decimal digit values of `code`, failing on the first non-digit.
pub(crate) fn digits(code: &str) -> Result<Vec<u32>, CheckDigitError> {
    code.chars()
        .enumerate()
        .map(|(i, c)| c.to_digit(10).ok_or(CheckDigitError::invalid_char(i, c)))
        .collect()
}

/// Split off the last `n` characters. `None` when the code is too short
/// or the split would land inside a multi-byte character.
pub(crate) fn split_tail(code: &str, n: usize) -> Option<(&str, &str)> {
    code.len()
        .checked_sub(n)
        .and_then(|mid| code.split_at_checked(mid))
}

/// Value of the last character when it is a decimal digit.
pub(crate) fn last_digit(code: &str) -> Option<u32> {
    code.chars().next_back().and_then(|c| c.to_digit(10))
}

/// Sum of the decimal digits of `number`.
pub fn sum_digits(number: u64) -> u64 {
    let mut total = 0;
    let mut todo = number;
    while todo > 0 {
        total += todo % 10;
        todo /= 10;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" 1 "));
        assert_eq!(require_code(""), Err(CheckDigitError::MissingCode));
    }

    #[test]
    fn digit_parsing() {
        assert_eq!(parse_digits("000123"), Some(123));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("-1"), None);
        assert_eq!(parse_digits("12a"), None);
        assert_eq!(parse_digits("99999999999999999999999"), None);
    }

    #[test]
    fn zero_detection() {
        assert!(is_all_zero("0000"));
        assert!(!is_all_zero(""));
        assert!(!is_all_zero("0010"));
    }

    #[test]
    fn digits_reports_position() {
        assert_eq!(digits("12"), Ok(vec![1, 2]));
        assert_eq!(
            digits("1x3"),
            Err(CheckDigitError::InvalidCharacter {
                position: 2,
                character: 'x'
            })
        );
    }

    #[test]
    fn tail_split() {
        assert_eq!(split_tail("ABC12", 2), Some(("ABC", "12")));
        assert_eq!(split_tail("1", 2), None);
        assert_eq!(split_tail("aé", 1), None);
    }

    #[test]
    fn digit_sums() {
        assert_eq!(sum_digits(0), 0);
        assert_eq!(sum_digits(18), 9);
        assert_eq!(sum_digits(70), 7);
        assert_eq!(sum_digits(12345), 15);
    }
}
