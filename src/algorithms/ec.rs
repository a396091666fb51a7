//! European Community numbers for chemical substances: the EC number
//! (`200-001-8`, EINECS/ELINCS/NLP) and the EC index number of the CLP
//! regulation (`601-001-00-4`).
//!
//! Both use the plain remainder `sum mod 11` as the check value, weighting
//! each body digit by its position from the left.

use crate::core::{CheckDigit, CheckDigitError, ModulusEngine, is_blank, last_digit, require_code};

const EC_LEN: usize = 7;
const EC_INDEX_LEN: usize = 9;

fn ec_weight(value: u32, left: usize, _right: usize) -> u64 {
    if left >= EC_LEN { 0 } else { u64::from(value) * left as u64 }
}

fn ec_index_weight(value: u32, left: usize, _right: usize) -> u64 {
    if left >= EC_INDEX_LEN { 0 } else { u64::from(value) * left as u64 }
}

/// EC number, seven plain digits. The hyphenated print form is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcNumber;

pub static EC_NUMBER: EcNumber = EcNumber;

impl EcNumber {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, ec_weight);
}

impl CheckDigit for EcNumber {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        Self::ENGINE.render(Self::ENGINE.remainder(code, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        if code.len() != EC_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match (Self::ENGINE.remainder(code, true), last_digit(code)) {
            (Ok(remainder), Some(check)) => remainder == u64::from(check),
            _ => false,
        }
    }
}

/// EC index number, nine characters with `X` standing for a check value of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcIndexNumber;

pub static EC_INDEX_NUMBER: EcIndexNumber = EcIndexNumber;

impl EcIndexNumber {
    const ENGINE: ModulusEngine = ModulusEngine::mod11_x(ec_index_weight);
}

impl CheckDigit for EcIndexNumber {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        Self::ENGINE.render(Self::ENGINE.remainder(code, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.chars().count() != EC_INDEX_LEN {
            return false;
        }
        let expected = Self::ENGINE
            .remainder(code, true)
            .and_then(|remainder| Self::ENGINE.render(remainder));
        matches!(expected, Ok(check) if code.ends_with(check.as_str()))
    }
}
