//! SEDOL, the London Stock Exchange security identifier.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code};

const WEIGHTS: [u32; 7] = [1, 3, 1, 7, 3, 9, 1];
const MAX_LEN: usize = 7;

fn char_value(c: char, _left: usize, right: usize) -> Option<u32> {
    let max = if right == 1 { 9 } else { 35 };
    c.to_digit(36).filter(|&v| v <= max)
}

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[left - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sedol;

pub static SEDOL: Sedol = Sedol;

impl Sedol {
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight).with_char_value(char_value);

    fn check_length(code: &str, includes_check_digit: bool) -> Result<(), CheckDigitError> {
        let length = code.chars().count() + usize::from(!includes_check_digit);
        if length > MAX_LEN {
            return Err(CheckDigitError::InvalidLength { length });
        }
        Ok(())
    }
}

impl CheckDigit for Sedol {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        Self::check_length(code, false)?;
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::check_length(code, true).is_ok() && Self::ENGINE.is_valid(code)
    }
}
