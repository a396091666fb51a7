//! ISSN, the International Standard Serial Number: seven digits and a check
//! character, `X` for 10.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code};

const LEN: usize = 8;

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value) * (9 - left) as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issn;

pub static ISSN: Issn = Issn;

impl Issn {
    // weights run 8..1 from the left, so the length is fixed
    const ENGINE: ModulusEngine = ModulusEngine::mod11_x(weight);
}

impl CheckDigit for Issn {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.chars().count() == LEN && Self::ENGINE.is_valid(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        for code in [
            "03178471", "1050124X", "15626865", "10637710", "17487188", "02642875", "17500095",
            "11881534", "19111479", "19111460", "00016772", "1365201X",
        ] {
            assert!(ISSN.is_valid(code), "{code}");
            assert_eq!(ISSN.calculate(&code[..7]).unwrap(), &code[7..], "{code}");
        }
    }

    #[test]
    fn invalid_codes() {
        for code in ["03178472", "1050-124X", " 1365201X", "1365201X ", " 1365201X "] {
            assert!(!ISSN.is_valid(code), "{code:?}");
        }
    }

    #[test]
    fn zero_sum_and_length() {
        assert_eq!(ISSN.calculate("0000000"), Err(CheckDigitError::ZeroSum));
        assert_eq!(
            ISSN.calculate("123456789"),
            Err(CheckDigitError::InvalidLength { length: 9 })
        );
    }
}
