//! Cyprus: eight digits and a check letter. Digits at odd positions are
//! remapped through a fixed table before summing.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, letter, require_code};

const LEN: usize = 9;
const ODD_POSITION_VALUES: [u64; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cyprus;

pub static CYPRUS: Cyprus = Cyprus;

impl CheckDigit for Cyprus {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        if code.starts_with("12") {
            return Err(CheckDigitError::Malformed("Cypriot numbers never start with 12"));
        }
        let body = digits(code)?;
        if body.len() != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length: body.len() });
        }
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        let total: u64 = body
            .iter()
            .enumerate()
            .map(|(i, &d)| if i % 2 == 0 { ODD_POSITION_VALUES[d as usize] } else { u64::from(d) })
            .sum();
        letter(LETTERS, total % 26)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
