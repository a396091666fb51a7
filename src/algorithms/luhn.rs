//! Luhn (modulus 10, "double-add-double"), used by payment cards and
//! Italian and Swedish VAT numbers.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine};

const WEIGHTS: [u32; 2] = [2, 1];

/// Doubles every second digit from the right, folding products above 9.
pub fn weight(value: u32, _left: usize, right: usize) -> u64 {
    let product = value * WEIGHTS[right % 2];
    u64::from(if product > 9 { product - 9 } else { product })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Luhn;

pub static LUHN: Luhn = Luhn;

impl Luhn {
    pub const ENGINE: ModulusEngine = ModulusEngine::new(10, weight);
}

impl CheckDigit for Luhn {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::ENGINE.is_valid(code)
    }
}
