//! Greece: nine digits, body weighted by powers of two from the right.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code, single_digit};

const LEN: usize = 9;

fn weight(value: u32, _left: usize, right: usize) -> u64 {
    u64::from(value) << (right - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greece;

pub static GREECE: Greece = Greece;

impl Greece {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, weight);
}

impl CheckDigit for Greece {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        single_digit(Self::ENGINE.remainder(code, false)? % 10)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
