//! Modulus 11 weighted by position from the right, `X` for a check value of 10.

use super::check_digit::CheckDigit;
use super::error::CheckDigitError;
use super::modulus::ModulusEngine;

/// `value * right_pos`.
pub fn by_right_pos(value: u32, _left: usize, right: usize) -> u64 {
    u64::from(value) * right as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus11X;

pub static MODULUS_11_X: Modulus11X = Modulus11X;

impl Modulus11X {
    pub const ENGINE: ModulusEngine = ModulusEngine::mod11_x(by_right_pos);
}

impl CheckDigit for Modulus11X {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::ENGINE.is_valid(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_by_right_position() {
        assert_eq!(by_right_pos(3, 1, 4), 12);
        assert_eq!(by_right_pos(7, 9, 1), 7);
    }

    #[test]
    fn x_check_value() {
        // 1*9 + 2*8 + 3*7 + 4*6 + 5*5 + 6*4 + 7*3 + 8*2 = 156, 156 mod 11 = 2, 11 - 2 = 9
        assert_eq!(MODULUS_11_X.calculate("12345678"), Ok("9".into()));
        assert!(MODULUS_11_X.is_valid("123456789"));
        assert_eq!(MODULUS_11_X.calculate("020163385"), Ok("X".into()));
        assert!(MODULUS_11_X.is_valid("020163385X"));
        assert!(!MODULUS_11_X.is_valid("0201633850"));
    }
}
