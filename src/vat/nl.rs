//! Netherlands: nine digits (weights 9..2, check `sum mod 11`) optionally
//! followed by a `B` and a two digit sequence number.

use crate::core::{
    CheckDigit, CheckDigitError, ModulusEngine, by_right_pos, require_code, single_digit,
};

const LEN: usize = 9;
const BRANCH_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Netherlands;

pub static NETHERLANDS: Netherlands = Netherlands;

impl Netherlands {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, by_right_pos);

    /// `B01` to `B99`.
    fn is_branch_suffix(suffix: &str) -> bool {
        matches!(suffix.as_bytes(), [b'B', d1, d2] if d1.is_ascii_digit() && d2.is_ascii_digit())
            && suffix != "B00"
    }
}

impl CheckDigit for Netherlands {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        single_digit(Self::ENGINE.remainder(code, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        let number = match code.len() {
            LEN => code,
            BRANCH_LEN => match code.split_at_checked(LEN) {
                Some((number, suffix)) if Self::is_branch_suffix(suffix) => number,
                _ => return false,
            },
            _ => return false,
        };
        super::check_tail(self, number, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in [
            "123456782",
            "010000446",
            "003660564",
            "004495445",
            "809944686",
            "803872987",
            "123456782B01",
            "004495445B99",
        ] {
            assert!(NETHERLANDS.is_valid(code), "{code}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in ["010001440", "123456782B00", "123456782X01", "123456782B1", "12345678"] {
            assert!(!NETHERLANDS.is_valid(code), "{code}");
        }
    }

    #[test]
    fn remainder_ten_is_rejected() {
        assert_eq!(
            NETHERLANDS.calculate("01000144"),
            Err(CheckDigitError::UnsupportedCheckDigitValue(10))
        );
        assert_eq!(NETHERLANDS.calculate("00000000"), Err(CheckDigitError::ZeroSum));
    }
}
