//! Estonia: nine digits weighted `3,7,1` repeating from the left.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine};

const LEN: usize = 9;
const WEIGHTS: [u32; 3] = [3, 7, 1];

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[(left - 1) % WEIGHTS.len()])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estonia;

pub static ESTONIA: Estonia = Estonia;

impl Estonia {
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight);
}

impl CheckDigit for Estonia {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && Self::ENGINE.is_valid(code)
    }
}
