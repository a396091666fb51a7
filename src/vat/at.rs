//! Austria: `U` followed by seven digits and a check digit.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, positional_sum, require_code, single_digit};

const LEN: usize = 9;

/// Odd positions count as-is, even positions as `v/5 + 2v mod 10`.
fn weighted_value(value: u32, left: usize) -> u64 {
    let value = u64::from(value);
    if left % 2 == 1 { value } else { value / 5 + value * 2 % 10 }
}

fn strip_u(code: &str) -> Result<&str, CheckDigitError> {
    code.strip_prefix('U').ok_or_else(|| match code.chars().next() {
        Some(character) => CheckDigitError::InvalidCharacter {
            position: 1,
            character,
        },
        None => CheckDigitError::MissingCode,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Austria;

pub static AUSTRIA: Austria = Austria;

impl CheckDigit for Austria {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let digits = strip_u(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        let total = positional_sum(digits, false, |c, left, _| {
            let value = c.to_digit(10).ok_or(CheckDigitError::InvalidCharacter {
                position: left + 1,
                character: c,
            })?;
            Ok(weighted_value(value, left))
        })?;
        single_digit((10 - (total + 4) % 10) % 10)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
