//! Slovenia: eight digits weighted by position from the right, modulus 11.

use super::check_tail;
use crate::core::{
    CheckDigit, CheckDigitError, ModulusEngine, by_right_pos, require_code, single_digit,
};

const LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slovenia;

pub static SLOVENIA: Slovenia = Slovenia;

impl Slovenia {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, by_right_pos);
}

impl CheckDigit for Slovenia {
    /// `11 - r`, where 10 is written as 0 and a zero remainder is never issued.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        match Self::ENGINE.remainder(code, false)? {
            0 => Err(CheckDigitError::UnsupportedCheckDigitValue(11)),
            1 => Ok("0".into()),
            remainder => single_digit(11 - remainder),
        }
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
        for code in [
            "00000019",
            "15012557",
            "59082437",
            "50223054",
            "45063575",
            "56494416",
            "21649405",
            "15012670",
            "99999994",
        ] {
            assert!(SLOVENIA.is_valid(code), "{code}");
        }
    }

    #[test]
    fn zero_remainder_is_rejected() {
        // 1*4 + 1*7 = 11
        assert_eq!(
            SLOVENIA.calculate("0100100"),
            Err(CheckDigitError::UnsupportedCheckDigitValue(11))
        );
        assert_eq!(SLOVENIA.calculate("0000000"), Err(CheckDigitError::ZeroSum));
    }
}
