//! Slovakia: the whole number is a multiple of 11.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, require_code, single_digit};

const MIN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slovakia;

/// `calculate` returns the final digit that makes the whole number divisible by 11.
pub static SLOVAKIA: Slovakia = Slovakia;

impl CheckDigit for Slovakia {
    /// The digit that makes `body * 10 + digit` divisible by 11.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        let remainder = body.iter().fold(0, |r, &d| (r * 10 + u64::from(d)) % 11);
        single_digit((11 - remainder * 10 % 11) % 11)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() >= MIN_LEN && check_tail(self, code, 1)
    }
}
