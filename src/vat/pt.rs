//! Portugal: nine digits weighted by position from the right, modulus 11.
//! A check value of 10 is written as `0`.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, by_right_pos, single_digit};

const LEN: usize = 9;

fn ten_as_zero(value: u64) -> Result<String, CheckDigitError> {
    single_digit(if value == 10 { 0 } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portugal;

pub static PORTUGAL: Portugal = Portugal;

impl Portugal {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, by_right_pos).with_render(ten_as_zero);
}

impl CheckDigit for Portugal {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
