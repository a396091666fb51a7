//! France: a two character key followed by the nine digit SIREN company
//! number, which carries its own Luhn check.
//!
//! The legacy key is numeric, `(SIREN * 100 + 12) mod 97`. The newer key
//! mixes a letter in and cannot be derived from the SIREN alone, so
//! `calculate` always issues the legacy key. Both are accepted on validation.

use crate::algorithms::LUHN;
use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, require_code, two_digits};

const SIREN_LEN: usize = 9;
const KEY_LEN: usize = 2;
/// Digits and letters without `I` and `O`.
const KEY_ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

fn siren(code: &str) -> Result<u64, CheckDigitError> {
    let body = digits(code)?;
    if body.len() != SIREN_LEN {
        return Err(CheckDigitError::InvalidLength {
            length: body.len() + KEY_LEN,
        });
    }
    if is_all_zero(code) {
        return Err(CheckDigitError::ZeroSum);
    }
    if !LUHN.is_valid(code) {
        return Err(CheckDigitError::Malformed("SIREN fails its Luhn check"));
    }
    Ok(body.iter().fold(0, |n, &d| n * 10 + u64::from(d)))
}

fn legacy_key(siren: u64) -> u64 {
    (siren * 100 + 12) % 97
}

fn key_index(c: char) -> Option<u64> {
    KEY_ALPHABET.find(c).map(|i| i as u64)
}

/// New-style key: one letter and one digit in either order.
fn new_style_matches(first: char, second: char, siren: u64) -> bool {
    let (Some(i0), Some(i1)) = (key_index(first), key_index(second)) else {
        return false;
    };
    let s = match (first.is_ascii_digit(), second.is_ascii_digit()) {
        (true, false) => i0 * 24 + i1 - 10,
        (false, true) => i0 * 34 + i1 - 100,
        _ => return false,
    };
    let p = s / 11 + 1;
    tracing::trace!(s, p, "new style key");
    s % 11 == (siren + p) % 11
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct France;

pub static FRANCE: France = France;

impl CheckDigit for France {
    /// The legacy numeric key for a SIREN.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        two_digits(legacy_key(siren(code)?))
    }

    fn is_valid(&self, code: &str) -> bool {
        if code.len() != KEY_LEN + SIREN_LEN {
            return false;
        }
        let Some((key, number)) = code.split_at_checked(KEY_LEN) else {
            return false;
        };
        let Ok(n) = siren(number) else {
            return false;
        };
        let mut chars = key.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            return false;
        };
        if first.is_ascii_digit() && second.is_ascii_digit() {
            key.parse::<u64>().is_ok_and(|k| k == legacy_key(n))
        } else {
            new_style_matches(first, second, n)
        }
    }
}
