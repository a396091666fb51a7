//! Configurable modulus 10 with a repeating weight table.

use super::check_digit::{CheckDigit, is_blank, require_code, sum_digits};
use super::error::CheckDigitError;
use super::modulus::{alphanumeric, positional_sum, single_digit};

/// Modulus 10 where the weight of each character comes from a table that
/// repeats, indexed by left or right position.
///
/// Letters count as 10..35. Optionally the digits of every product are summed
/// (the Luhn trick, generalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModulusTen {
    weights: &'static [u32],
    use_right_pos: bool,
    sum_weighted_digits: bool,
}

impl ModulusTen {
    /// Weights by left position, products used as-is.
    pub const fn new(weights: &'static [u32]) -> Self {
        Self {
            weights,
            use_right_pos: false,
            sum_weighted_digits: false,
        }
    }

    pub const fn right_pos(self) -> Self {
        Self {
            use_right_pos: true,
            ..self
        }
    }

    pub const fn sum_weighted_digits(self) -> Self {
        Self {
            sum_weighted_digits: true,
            ..self
        }
    }

    fn weighted_sum(&self, code: &str, includes_check_digit: bool) -> Result<u64, CheckDigitError> {
        if self.weights.is_empty() {
            return Err(CheckDigitError::Malformed("empty weight table"));
        }
        positional_sum(code, includes_check_digit, |c, left, right| {
            let value = alphanumeric(c, left, right).ok_or(CheckDigitError::InvalidCharacter {
                position: left,
                character: c,
            })?;
            let pos = if self.use_right_pos { right } else { left };
            let weight = self.weights[(pos - 1) % self.weights.len()];
            let product = u64::from(value * weight);
            Ok(if self.sum_weighted_digits {
                sum_digits(product)
            } else {
                product
            })
        })
    }
}

impl CheckDigit for ModulusTen {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let remainder = self.weighted_sum(code, false)? % 10;
        single_digit((10 - remainder) % 10)
    }

    /// The last character must be a digit; letters only appear in the body.
    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || !code.chars().next_back().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        matches!(self.weighted_sum(code, true), Ok(total) if total % 10 == 0)
    }
}
