//! Lithuania: 9 digits for companies, 12 for others.
//!
//! Weights run 1..9 then restart at 1. When the remainder mod 11 is 10, a
//! second pass weights 3..9 then 1..; a second 10 gives 0.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, require_code, single_digit};

const SHORT_LEN: usize = 9;
const LONG_LEN: usize = 12;

fn first_pass(left: usize) -> u64 {
    (if left > 9 { left - 9 } else { left }) as u64
}

fn second_pass(left: usize) -> u64 {
    (if left > 7 { left - 7 } else { left + 2 }) as u64
}

fn remainder(body: &[u32], weight: fn(usize) -> u64) -> u64 {
    body.iter()
        .enumerate()
        .map(|(i, &d)| u64::from(d) * weight(i + 1))
        .sum::<u64>()
        % 11
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lithuania;

pub static LITHUANIA: Lithuania = Lithuania;

impl CheckDigit for Lithuania {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        let length = body.len() + 1;
        if length != SHORT_LEN && length != LONG_LEN {
            return Err(CheckDigitError::InvalidLength { length });
        }
        if body.iter().all(|&d| d == 0) {
            return Err(CheckDigitError::ZeroSum);
        }
        let check = match remainder(&body, first_pass) {
            10 => match remainder(&body, second_pass) {
                10 => 0,
                r => r,
            },
            r => r,
        };
        single_digit(check)
    }

    fn is_valid(&self, code: &str) -> bool {
        check_tail(self, code, 1)
    }
}
