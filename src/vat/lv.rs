//! Latvia: eleven digits. A first digit above 3 marks a legal entity;
//! otherwise the number is a personal code, which embeds a birth date as
//! `DDMMYY` plus a century digit (0, 1, 2 for the 1800s, 1900s, 2000s).
//! Personal codes issued since 2017 start with `32` and carry no date.

use chrono::NaiveDate;

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, require_code, single_digit};

const LEN: usize = 11;
const LEGAL_WEIGHTS: [u32; 10] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6];
const PERSON_WEIGHTS: [u32; 10] = [1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// `base - r`, where -1 has no check digit and anything lower wraps by 11.
fn offset_check(base: i64, body: &[u32], weights: [u32; 10]) -> Result<u64, CheckDigitError> {
    let total: u32 = body.iter().zip(weights).map(|(&d, w)| d * w).sum();
    let check = base - i64::from(total % 11);
    match check {
        -1 => Err(CheckDigitError::Malformed("no check digit fits this number")),
        c if c < -1 => Ok((c + 11) as u64),
        c => Ok(c as u64),
    }
}

/// `None` for numbers without an embedded date.
fn birth_date(body: &[u32]) -> Result<Option<NaiveDate>, CheckDigitError> {
    let pair = |i: usize| body[i] * 10 + body[i + 1];
    let (dd, mm, yy) = (pair(0), pair(2), pair(4));
    if !(1..=31).contains(&dd) {
        return Ok(None);
    }
    let century = match body[6] {
        c @ 0..=2 => 1800 + 100 * c,
        c => return Err(CheckDigitError::InvalidDate(format!("century digit {c}"))),
    };
    let year = century + yy;
    NaiveDate::from_ymd_opt(year as i32, mm, dd)
        .map(Some)
        .ok_or_else(|| CheckDigitError::InvalidDate(format!("{year}-{mm:02}-{dd:02}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latvia;

pub static LATVIA: Latvia = Latvia;

impl CheckDigit for Latvia {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if body.len() != LEN - 1 {
            return Err(CheckDigitError::InvalidLength {
                length: body.len() + 1,
            });
        }
        if body.iter().all(|&d| d == 0) {
            return Err(CheckDigitError::ZeroSum);
        }
        let check = if body[0] > 3 {
            offset_check(3, &body, LEGAL_WEIGHTS)?
        } else {
            if let Some(born) = birth_date(&body)? {
                tracing::debug!(%born, "personal code");
            }
            offset_check(1, &body, PERSON_WEIGHTS)?
        };
        single_digit(check)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() == LEN && check_tail(self, code, 1)
    }
}
