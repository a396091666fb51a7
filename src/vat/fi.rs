//! Finland: eight digits weighted `7,9,10,5,8,4,2`, modulus 11.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code};

const LEN: usize = 8;
const WEIGHTS: [u32; LEN - 1] = [7, 9, 10, 5, 8, 4, 2];

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[left - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finland;

pub static FINLAND: Finland = Finland;

impl Finland {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, weight);
}

impl CheckDigit for Finland {
    /// `11 - r`, 0 for a zero remainder. A value of 10 is never issued.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in ["13669598", "01745928", "09853608", "20774740"] {
            assert!(FINLAND.is_valid(code), "{code}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in ["1456785X", "1745928", "X2482300", "13669597"] {
            assert!(!FINLAND.is_valid(code), "{code}");
        }
        assert_eq!(FINLAND.calculate("0000000"), Err(CheckDigitError::ZeroSum));
    }

    #[test]
    fn remainder_one_is_rejected() {
        // 1*10 + 1*2 = 12, 12 mod 11 = 1, 11 - 1 = 10
        assert_eq!(
            FINLAND.calculate("0010001"),
            Err(CheckDigitError::UnsupportedCheckDigitValue(10))
        );
    }
}
