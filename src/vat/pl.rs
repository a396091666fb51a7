//! Poland: ten digits, weights `6,5,7,2,3,4,5,6,7`, check `sum mod 11`.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, require_code, single_digit};

const LEN: usize = 10;
const WEIGHTS: [u32; LEN - 1] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

fn weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * WEIGHTS[left - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poland;

pub static POLAND: Poland = Poland;

impl Poland {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, weight);
}

impl CheckDigit for Poland {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != LEN - 1 {
            return Err(CheckDigitError::InvalidLength { length });
        }
        single_digit(Self::ENGINE.remainder(code, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
