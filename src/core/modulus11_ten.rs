//! ISO 7064 MOD 11,10, the hybrid system behind German and Croatian VAT numbers.
//!
//! Not a weighted sum: a running `product`, seeded with 10, is folded through
//! every digit.
//!
//! ```text
//! sum     = (digit + product) mod 10, 0 becomes 10
//! product = (2 * sum) mod 11
//! check   = 11 - product, 10 becomes 0
//! ```

use super::check_digit::{
    CheckDigit, digits, is_all_zero, is_blank, last_digit, require_code, split_tail,
};
use super::error::CheckDigitError;
use super::modulus::single_digit;

const MIN_CODE_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus11Ten;

pub static MODULUS_11_TEN: Modulus11Ten = Modulus11Ten;

impl Modulus11Ten {
    /// Check value for a body of decimal digits.
    pub fn check_value(body: &str) -> Result<u32, CheckDigitError> {
        let mut product = 10;
        for digit in digits(body)? {
            let sum = match (digit + product) % 10 {
                0 => 10,
                s => s,
            };
            product = 2 * sum % 11;
        }
        tracing::trace!(body, product, "mod 11,10 product");
        Ok(match 11 - product {
            10 => 0,
            check => check,
        })
    }
}

impl CheckDigit for Modulus11Ten {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        single_digit(u64::from(Self::check_value(code)?))
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.len() < MIN_CODE_LEN {
            return false;
        }
        let Some((body, _)) = split_tail(code, 1) else {
            return false;
        };
        if is_all_zero(body) {
            return false;
        }
        match (Self::check_value(body), last_digit(code)) {
            (Ok(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_vat_numbers() {
        for code in ["136695976", "128514248", "205130669", "811128135"] {
            assert!(MODULUS_11_TEN.is_valid(code), "{code}");
        }
        assert_eq!(MODULUS_11_TEN.calculate("13669597"), Ok("6".into()));
    }

    #[test]
    fn theoretical_bounds() {
        assert!(MODULUS_11_TEN.is_valid("000000011"));
        assert!(MODULUS_11_TEN.is_valid("999999995"));
        assert!(MODULUS_11_TEN.is_valid("00000000010"));
        assert!(MODULUS_11_TEN.is_valid("99999999994"));
    }

    #[test]
    fn zero_body_rejected() {
        assert!(!MODULUS_11_TEN.is_valid("000000003"));
        assert_eq!(MODULUS_11_TEN.calculate("00000000"), Err(CheckDigitError::ZeroSum));
    }

    #[test]
    fn short_and_blank() {
        assert!(!MODULUS_11_TEN.is_valid("9"));
        assert!(!MODULUS_11_TEN.is_valid(""));
        assert_eq!(MODULUS_11_TEN.calculate(" "), Err(CheckDigitError::MissingCode));
    }

    #[test]
    fn non_digits() {
        assert!(!MODULUS_11_TEN.is_valid("13669597X"));
        assert!(MODULUS_11_TEN.calculate("1366A597").is_err());
    }
}
