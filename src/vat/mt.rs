//! Malta: six digits weighted `3,4,6,7,8,9` and two check digits, `37 - r`.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code, two_digits};

const LEN: usize = 8;
const WEIGHTS: [u32; 6] = [3, 4, 6, 7, 8, 9];

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[left - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malta;

pub static MALTA: Malta = Malta;

impl Malta {
    const ENGINE: ModulusEngine = ModulusEngine::new(37, weight);
}

impl CheckDigit for Malta {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != WEIGHTS.len() {
            return Err(CheckDigitError::InvalidLength { length });
        }
        two_digits(Self::ENGINE.modulus() - Self::ENGINE.remainder(code, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 2)
    }
}
