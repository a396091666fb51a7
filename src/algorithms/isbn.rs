//! ISBN-10, EAN-13 and the ISBN routine that picks between them by length.

use crate::core::{CheckDigit, CheckDigitError, MODULUS_11_X, ModulusEngine, require_code};

const ISBN10_BODY_LEN: usize = 9;
const EAN13_BODY_LEN: usize = 12;

/// ISBN-10: modulus 11 weighted by right position, `X` for 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isbn10;

pub static ISBN10: Isbn10 = Isbn10;

impl CheckDigit for Isbn10 {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        MODULUS_11_X.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        MODULUS_11_X.is_valid(code)
    }
}

const EAN_WEIGHTS: [u32; 2] = [3, 1];

fn ean_weight(value: u32, _left: usize, right: usize) -> u64 {
    u64::from(value * EAN_WEIGHTS[right % 2])
}

/// EAN-13 (and ISBN-13): modulus 10, weights 1 and 3 alternating from the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ean13;

pub static EAN13: Ean13 = Ean13;

impl Ean13 {
    pub const ENGINE: ModulusEngine = ModulusEngine::new(10, ean_weight);
}

impl CheckDigit for Ean13 {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        Self::ENGINE.calculate(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        Self::ENGINE.is_valid(code)
    }
}

/// ISBN-10 for 9/10 character codes, EAN-13 for 12/13 character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isbn;

pub static ISBN: Isbn = Isbn;

impl CheckDigit for Isbn {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        match code.chars().count() {
            ISBN10_BODY_LEN => ISBN10.calculate(code),
            EAN13_BODY_LEN => EAN13.calculate(code),
            length => Err(CheckDigitError::InvalidLength { length }),
        }
    }

    fn is_valid(&self, code: &str) -> bool {
        match code.chars().count() {
            10 => ISBN10.is_valid(code),
            13 => EAN13.is_valid(code),
            _ => false,
        }
    }
}
