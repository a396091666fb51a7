//! ABA routing transit numbers (US bank routing codes).

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine};

const WEIGHTS: [u32; 3] = [3, 1, 7];

fn weight(value: u32, _left: usize, right: usize) -> u64 {
    u64::from(value * WEIGHTS[right % 3])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aba;

pub static ABA: Aba = Aba;

impl Aba {
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight);
}

impl CheckDigit for Aba {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::ENGINE.is_valid(code)
    }
}
