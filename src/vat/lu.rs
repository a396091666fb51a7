//! Luxembourg: eight digits, the last two being the first six modulo 89.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, mod97_stream, require_code, two_digits};

const LEN: usize = 8;
const MODULUS: u64 = 89;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Luxembourg;

pub static LUXEMBOURG: Luxembourg = Luxembourg;

impl CheckDigit for Luxembourg {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        digits(code)?;
        match mod97_stream(code, MODULUS)? % MODULUS {
            0 => Err(CheckDigitError::ZeroSum),
            remainder => two_digits(remainder),
        }
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in ["25180625", "15027442", "13669580", "10000356"] {
            assert!(LUXEMBOURG.is_valid(code), "{code}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in ["00000000", "00008900", "25180626", "2518062"] {
            assert!(!LUXEMBOURG.is_valid(code), "{code}");
        }
        assert_eq!(LUXEMBOURG.calculate("000089"), Err(CheckDigitError::ZeroSum));
    }
}
