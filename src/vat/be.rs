//! Belgium: ten digits, the last two being `97 - (first eight mod 97)`.
//! Numbers issued before 2005 have nine digits and read as if left padded
//! with a zero.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, mod97_stream, require_code, two_digits};

const MODULUS: u64 = 97;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Belgium;

pub static BELGIUM: Belgium = Belgium;

impl CheckDigit for Belgium {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        digits(code)?;
        let remainder = mod97_stream(code, MODULUS)? % MODULUS;
        if remainder == 0 {
            return Err(CheckDigitError::ZeroSum);
        }
        two_digits(MODULUS - remainder)
    }

    fn is_valid(&self, code: &str) -> bool {
        matches!(code.len(), 9 | 10) && check_tail(self, code, 2)
    }
}
