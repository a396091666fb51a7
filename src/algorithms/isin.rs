//! ISIN, the International Securities Identification Number.
//!
//! Letters are first expanded to their two-digit values (`A` = 10 … `Z` = 35),
//! then the digit string is checked with doubled alternate weights.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, is_blank, require_code, sum_digits};

const WEIGHTS: [u32; 2] = [2, 1];

fn weight(value: u32, _left: usize, right: usize) -> u64 {
    sum_digits(u64::from(value * WEIGHTS[right % 2]))
}

/// Replace every character by the decimal text of its value.
fn expand(code: &str) -> Result<String, CheckDigitError> {
    let mut expanded = String::with_capacity(code.len() * 2);
    for (i, c) in code.chars().enumerate() {
        let value = c.to_digit(36).ok_or(CheckDigitError::invalid_char(i, c))?;
        expanded.push_str(&value.to_string());
    }
    Ok(expanded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isin;

pub static ISIN: Isin = Isin;

impl Isin {
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight);
}

impl CheckDigit for Isin {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        Self::ENGINE.calculate(&expand(code)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || !code.chars().next_back().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        expand(code).is_ok_and(|expanded| Self::ENGINE.is_valid(&expanded))
    }
}
