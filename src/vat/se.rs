//! Sweden: a ten digit organisation number checked with Luhn, followed by
//! the suffix `01`.

use crate::algorithms::LUHN;
use crate::core::{CheckDigit, CheckDigitError, require_code};

const LEN: usize = 10;
const SUFFIX: &str = "01";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweden;

pub static SWEDEN: Sweden = Sweden;

impl CheckDigit for Sweden {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        LUHN.calculate(code)
    }

    /// The `01` suffix is optional.
    fn is_valid(&self, code: &str) -> bool {
        let number = code.strip_suffix(SUFFIX).filter(|n| n.len() == LEN).unwrap_or(code);
        number.len() == LEN && LUHN.is_valid(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in [
            "0000000018",
            "1366959755",
            "5561888404",
            "1234567897",
            "5560528514",
            "5566801444",
            "5565102471",
            "5565102570",
            "9999999999",
            "556188840401",
        ] {
            assert!(SWEDEN.is_valid(code), "{code}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in ["5561888405", "556188840402", "55618884040", "123456789"] {
            assert!(!SWEDEN.is_valid(code), "{code}");
        }
        assert_eq!(SWEDEN.calculate("556188840"), Ok("4".into()));
    }
}
