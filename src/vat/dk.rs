//! Denmark: eight digits, weighted `2,7,6,5,4,3,2,1`, the sum a multiple of 11.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code};

const LEN: usize = 8;
const WEIGHTS: [u32; LEN] = [2, 7, 6, 5, 4, 3, 2, 1];

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[left - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denmark;

/// `calculate` returns the final digit that completes the multiple of 11.
pub static DENMARK: Denmark = Denmark;

impl Denmark {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, weight);
}

impl CheckDigit for Denmark {
    /// The last digit has weight 1, so it is whatever completes the multiple
    /// of 11. A required value of 10 means no valid number has this body.
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
        for code in ["88146328", "13585628", "13748136"] {
            assert!(DENMARK.is_valid(code), "{code}");
        }
    }

    #[test]
    fn calculate_returns_final_digit() {
        assert_eq!(DENMARK.calculate("1358562"), Ok("8".into()));
        assert_eq!(DENMARK.calculate("8814632"), Ok("8".into()));
    }

    #[test]
    fn invalid_numbers() {
        assert!(!DENMARK.is_valid("88146327"));
        assert!(!DENMARK.is_valid("881463280"));
        assert_eq!(DENMARK.calculate("0000000"), Err(CheckDigitError::ZeroSum));
        assert_eq!(
            DENMARK.calculate("88146328"),
            Err(CheckDigitError::InvalidLength { length: 8 })
        );
    }
}
