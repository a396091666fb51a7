//! CUSIP, the North American securities identifier.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, sum_digits};

const WEIGHTS: [u32; 2] = [2, 1];

/// Alphanumeric body, numeric check digit.
fn char_value(c: char, _left: usize, right: usize) -> Option<u32> {
    let max = if right == 1 { 9 } else { 35 };
    c.to_digit(36).filter(|&v| v <= max)
}

fn weight(value: u32, _left: usize, right: usize) -> u64 {
    sum_digits(u64::from(value * WEIGHTS[right % 2]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cusip;

pub static CUSIP: Cusip = Cusip;

impl Cusip {
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight).with_char_value(char_value);
}

impl CheckDigit for Cusip {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::ENGINE.is_valid(code)
    }
}
