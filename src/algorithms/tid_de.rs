//! German tax identification number (Steuerliche Identifikationsnummer).
//!
//! Eleven digits: a ten digit body checked with ISO 7064 MOD 11,10 and a
//! structural rule on repeated digits. In the body exactly one digit occurs
//! twice or three times; a tripled digit must not appear as a run of three.

use crate::core::{
    CheckDigit, CheckDigitError, Modulus11Ten, digits, is_all_zero, require_code, single_digit,
    split_tail,
};

const BODY_LEN: usize = 10;

/// Check the repetition rule on the ten body digits.
fn repetition_rule(body: &[u32]) -> Result<(), &'static str> {
    let mut counts = [0usize; 10];
    for &digit in body {
        counts[digit as usize] += 1;
    }
    let doubled = counts.iter().filter(|&&n| n == 2).count();
    let tripled: Vec<u32> = (0..10).filter(|&d| counts[d as usize] == 3).collect();

    if counts.iter().any(|&n| n > 3) {
        return Err("digit repeated more than three times");
    }
    if doubled == 0 && tripled.is_empty() {
        return Err("no repeated digit");
    }
    if doubled > 1 {
        return Err("more than one doubled digit");
    }
    match tripled.as_slice() {
        [] => Ok(()),
        [digit] if body.windows(3).any(|w| w.iter().all(|d| d == digit)) => {
            Err("tripled digit in a row")
        }
        [_] => Ok(()),
        _ => Err("more than one tripled digit"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TidDe;

pub static TID_DE: TidDe = TidDe;

impl TidDe {
    /// The ten body digits, once length and zero checks pass.
    fn body_digits(code: &str) -> Result<Vec<u32>, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if body.len() != BODY_LEN {
            return Err(CheckDigitError::InvalidLength { length: body.len() });
        }
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        Ok(body)
    }
}

impl CheckDigit for TidDe {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        let body = Self::body_digits(code)?;
        if let Err(reason) = repetition_rule(&body) {
            tracing::debug!(code, reason, "tax id breaks the digit repetition rule");
            return Err(CheckDigitError::Malformed(reason));
        }
        single_digit(u64::from(Modulus11Ten::check_value(code)?))
    }

    fn is_valid(&self, code: &str) -> bool {
        let Some((body, check)) = split_tail(code, 1) else {
            return false;
        };
        let Ok(digits) = Self::body_digits(body) else {
            return false;
        };
        repetition_rule(&digits).is_ok()
            && Modulus11Ten::check_value(body)
                .is_ok_and(|expected| check.parse::<u32>() == Ok(expected))
    }
}
