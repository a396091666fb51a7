//! Romania: two to ten digits. The body is read right aligned against the
//! weights `7,5,3,2,1,7,5,3,2`, check `10 * sum mod 11` with 10 written as 0.

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, require_code, single_digit};

const WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];
const MIN_LEN: usize = 2;
const MAX_LEN: usize = WEIGHTS.len() + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Romania;

pub static ROMANIA: Romania = Romania;

impl CheckDigit for Romania {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if body.len() > WEIGHTS.len() {
            return Err(CheckDigitError::InvalidLength { length: body.len() });
        }
        let offset = WEIGHTS.len() - body.len();
        let total: u64 = body
            .iter()
            .zip(&WEIGHTS[offset..])
            .map(|(&digit, &weight)| u64::from(digit * weight))
            .sum();
        if total == 0 {
            return Err(CheckDigitError::ZeroSum);
        }
        single_digit(total * 10 % 11 % 10)
    }

    fn is_valid(&self, code: &str) -> bool {
        (MIN_LEN..=MAX_LEN).contains(&code.len()) && check_tail(self, code, 1)
    }
}
