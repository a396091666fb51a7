//! ISO 7064 MOD 97-10 and its relatives with a different modulus.
//!
//! The code is read as one long decimal number in which every letter stands
//! for two digits (`A` = 10 … `Z` = 35). The accumulator is reduced whenever it
//! grows past nine digits, so codes of any length fit in a `u64`.

use super::check_digit::{CheckDigit, is_blank, require_code, split_tail};
use super::error::CheckDigitError;
use super::modulus::{alphanumeric, two_digits};

/// Largest accumulator value kept before reducing.
const MAX: u64 = 999_999_999;

/// Number of trailing check characters.
pub const CHECK_DIGIT_LEN: usize = 2;

const MIN_CODE_LEN: usize = 4;

/// Stream `code` through the accumulator, reducing by `modulus` as it grows.
///
/// The result is not fully reduced; callers take the final `% modulus`.
pub fn stream(code: &str, modulus: u64) -> Result<u64, CheckDigitError> {
    let mut total: u64 = 0;
    for (i, c) in code.chars().enumerate() {
        let value = alphanumeric(c, i + 1, 0).ok_or(CheckDigitError::invalid_char(i, c))?;
        let value = u64::from(value);
        total = if value > 9 { total * 100 } else { total * 10 } + value;
        if total > MAX {
            total %= modulus;
        }
    }
    Ok(total)
}

/// Check digits trail the code and satisfy `code mod m == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus97 {
    modulus: u64,
}

/// ISO 7064 MOD 97-10 as used by LEI codes.
pub static MODULUS_97: Modulus97 = Modulus97::new(97);

impl Modulus97 {
    pub const fn new(modulus: u64) -> Self {
        Self { modulus }
    }

    pub const fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl CheckDigit for Modulus97 {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength { length });
        }
        // append the "00" placeholder for the check digits
        let mut total = stream(code, self.modulus)? * 100;
        if total > MAX {
            total %= self.modulus;
        }
        let remainder = total % self.modulus;
        if remainder == 0 {
            return Err(CheckDigitError::ZeroSum);
        }
        two_digits((self.modulus + 1 - remainder) % self.modulus)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.chars().count() < MIN_CODE_LEN {
            return false;
        }
        let Some((_, check)) = split_tail(code, CHECK_DIGIT_LEN) else {
            return false;
        };
        if !check.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        matches!(stream(code, self.modulus), Ok(total) if total % self.modulus == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_expands_letters() {
        // "A1" reads as 10 then 1 -> 101
        assert_eq!(stream("A1", 97), Ok(101));
        assert_eq!(stream("123", 97), Ok(123));
        assert!(stream("1#", 97).is_err());
    }

    #[test]
    fn stream_reduces_long_codes() {
        let long = "9".repeat(40);
        let total = stream(&long, 97).unwrap();
        assert!(total <= MAX);
    }

    #[test]
    fn lei_codes() {
        for code in [
            "54930084UKLVMY22DS16",
            "213800WSGIIZCXF1P572",
            "529900CLVK38HUKPKF71",
        ] {
            assert!(MODULUS_97.is_valid(code), "{code}");
            let (body, check) = code.split_at(code.len() - 2);
            assert_eq!(MODULUS_97.calculate(body).unwrap(), check, "{code}");
        }
    }

    #[test]
    fn short_codes() {
        assert!(MODULUS_97.is_valid("000195"));
        assert_eq!(MODULUS_97.calculate("0001"), Ok("95".into()));
        assert_eq!(
            MODULUS_97.calculate("001"),
            Err(CheckDigitError::InvalidLength { length: 3 })
        );
        assert!(!MODULUS_97.is_valid("195"));
    }

    #[test]
    fn check_digits_must_be_numeric() {
        assert!(!MODULUS_97.is_valid("000A95"));
        assert!(!MODULUS_97.is_valid("0001X5"));
    }

    #[test]
    fn zero_body() {
        assert_eq!(MODULUS_97.calculate("0000"), Err(CheckDigitError::ZeroSum));
    }
}
