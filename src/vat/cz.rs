//! Czech Republic: three forms distinguished by length.
//!
//! - 8 digits, legal entities: weights 8..2, check `(11 - r) mod 10` where
//!   a zero remainder counts as 11. Never starts with 9.
//! - 9 digits, individuals without a birth number: starts with 6, weights
//!   8..2 on digits two to eight, the difference to the next multiple of 11
//!   mapped through a fixed table.
//! - 10 digits, birth number (rodné číslo): `YYMMDD` plus four digits, the
//!   whole number divisible by 11. Women add 50 to the month, and 20 may be
//!   added when a day runs out of serial numbers.

use chrono::NaiveDate;

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, require_code, single_digit};

const LEGAL_LEN: usize = 8;
const SPECIAL_LEN: usize = 9;
const BIRTH_NUMBER_LEN: usize = 10;

const DIFF_TABLE: [u64; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8];

/// Body digits weighted by position from the right, the last body digit at 2.
fn weighted_sum(body: &[u32]) -> u64 {
    let len = body.len();
    body.iter()
        .enumerate()
        .map(|(i, &d)| u64::from(d) * (len + 1 - i) as u64)
        .sum()
}

fn legal_entity(body: &[u32]) -> Result<u64, CheckDigitError> {
    if body.len() == LEGAL_LEN - 1 && body[0] == 9 {
        return Err(CheckDigitError::Malformed("legal entity numbers never start with 9"));
    }
    let remainder = weighted_sum(body) % 11;
    tracing::trace!(remainder, "legal entity remainder");
    let difference = if remainder == 0 { 11 } else { 11 - remainder };
    Ok(difference % 10)
}

fn special_case(body: &[u32]) -> Result<u64, CheckDigitError> {
    if body[0] != 6 {
        return Err(CheckDigitError::Malformed("special individual numbers start with 6"));
    }
    let total = weighted_sum(&body[1..]);
    if total == 0 {
        return Err(CheckDigitError::ZeroSum);
    }
    let remainder = total % 11;
    tracing::trace!(remainder, "individual remainder");
    let difference = if remainder == 0 { 11 } else { 11 - remainder };
    Ok(DIFF_TABLE[difference as usize - 1])
}

/// Decode `YYMMDD` of a birth number.
fn birth_date(body: &[u32]) -> Result<NaiveDate, CheckDigitError> {
    let pair = |i: usize| body[i] * 10 + body[i + 1];
    let (yy, mm, dd) = (pair(0), pair(2), pair(4));
    let month = match mm {
        1..=12 => mm,
        51..=62 => mm - 50,
        21..=32 => mm - 20,
        71..=82 => mm - 70,
        _ => return Err(CheckDigitError::InvalidDate(format!("month {mm:02}"))),
    };
    let year = if yy >= 54 { 1900 + yy } else { 2000 + yy };
    NaiveDate::from_ymd_opt(year as i32, month, dd)
        .ok_or_else(|| CheckDigitError::InvalidDate(format!("{year}-{month:02}-{dd:02}")))
}

fn birth_number(body: &[u32]) -> Result<u64, CheckDigitError> {
    let born = birth_date(body)?;
    tracing::debug!(%born, "born");
    let remainder = body.iter().fold(0, |r, &d| (r * 10 + u64::from(d)) % 11);
    Ok((11 - remainder * 10 % 11) % 11)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CzechRepublic;

pub static CZECH_REPUBLIC: CzechRepublic = CzechRepublic;

impl CheckDigit for CzechRepublic {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        let (form, check): (&str, fn(&[u32]) -> Result<u64, CheckDigitError>) =
            match body.len() + 1 {
                length if length <= LEGAL_LEN => ("legal entity", legal_entity),
                SPECIAL_LEN => ("individual", special_case),
                BIRTH_NUMBER_LEN => ("birth number", birth_number),
                length => return Err(CheckDigitError::InvalidLength { length }),
            };
        tracing::debug!(form, "czech identifier");
        let check = check(&body)?;
        single_digit(check)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() <= BIRTH_NUMBER_LEN && check_tail(self, code, 1)
    }
}
