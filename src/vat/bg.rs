//! Bulgaria: three forms distinguished by length.
//!
//! - 9 digits, companies (BULSTAT): weights 1..8, and 3..10 when the first
//!   pass leaves a remainder of 10.
//! - 10 digits, civil number (EGN): `YYMMDD`, a serial whose parity gives the
//!   sex, and a check digit. 20 is added to the month for births before
//!   1900, 40 for births after 1999.
//! - 13 digits, company branches: a valid 9 digit number followed by four
//!   branch digits and their own check digit.

use chrono::NaiveDate;

use super::check_tail;
use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, require_code, single_digit};

const LEGAL_LEN: usize = 9;
const CIVIL_LEN: usize = 10;
const BRANCH_LEN: usize = 13;

const CIVIL_WEIGHTS: [u64; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];
const BRANCH_WEIGHTS: [u64; 4] = [2, 7, 3, 5];
const BRANCH_WEIGHTS_RETRY: [u64; 4] = [4, 9, 5, 7];

fn dot(digits: &[u32], weights: impl IntoIterator<Item = u64>) -> u64 {
    digits.iter().zip(weights).map(|(&d, w)| u64::from(d) * w).sum()
}

fn legal_entity(body: &[u32]) -> u64 {
    let remainder = match dot(body, 1..) % 11 {
        10 => {
            let retry = dot(body, 3..) % 11;
            tracing::trace!(retry, "recalculated with increased weights");
            retry
        }
        r => r,
    };
    remainder % 10
}

fn birth_date(body: &[u32]) -> Result<NaiveDate, CheckDigitError> {
    let pair = |i: usize| body[i] * 10 + body[i + 1];
    let (yy, mm, dd) = (pair(0), pair(2), pair(4));
    let (year, month) = match mm {
        41.. => (2000 + yy, mm - 40),
        21.. => (1800 + yy, mm - 20),
        _ => (1900 + yy, mm),
    };
    NaiveDate::from_ymd_opt(year as i32, month, dd)
        .ok_or_else(|| CheckDigitError::InvalidDate(format!("{year}-{month:02}-{dd:02}")))
}

fn civil_number(body: &[u32]) -> Result<u64, CheckDigitError> {
    let born = birth_date(body)?;
    let male = body[8] % 2 == 0;
    tracing::debug!(%born, male, "civil number");
    Ok(dot(body, CIVIL_WEIGHTS) % 11 % 10)
}

fn branch(body: &[u32]) -> Result<u64, CheckDigitError> {
    let (company, rest) = body.split_at(LEGAL_LEN);
    if legal_entity(&company[..LEGAL_LEN - 1]) != u64::from(company[LEGAL_LEN - 1]) {
        return Err(CheckDigitError::Malformed("branch of an invalid company number"));
    }
    let remainder = match dot(rest, BRANCH_WEIGHTS) % 11 {
        10 => dot(rest, BRANCH_WEIGHTS_RETRY) % 11,
        r => r,
    };
    Ok(remainder % 10)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bulgaria;

pub static BULGARIA: Bulgaria = Bulgaria;

impl CheckDigit for Bulgaria {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let body = digits(code)?;
        if is_all_zero(code) {
            return Err(CheckDigitError::ZeroSum);
        }
        let check = match body.len() + 1 {
            LEGAL_LEN => legal_entity(&body),
            CIVIL_LEN => civil_number(&body)?,
            BRANCH_LEN => branch(&body)?,
            length => return Err(CheckDigitError::InvalidLength { length }),
        };
        single_digit(check)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() >= LEGAL_LEN && check_tail(self, code, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- companies ---

    #[test]
    fn companies() {
        for code in [
            "108511243", "206425654", "131324923", "121759222", "207402758", "205153347",
            "204407312", "201334001", "131129282", "203519454", "207350980", "207546057",
            "831650349", "207839658", "175074752",
        ] {
            assert!(BULGARIA.is_valid(code), "{code}");
        }
    }

    #[test]
    fn increased_weights() {
        for code in ["217839654", "175074767", "474074760"] {
            assert!(BULGARIA.is_valid(code), "{code}");
        }
    }

    // --- civil numbers ---

    #[test]
    fn civil_numbers() {
        for code in [
            "7524169268",
            "7501010010",
            "7552010005",
            "8032056031",
            "8001010008",
            "7552011038",
            "8141010016",
        ] {
            assert!(BULGARIA.is_valid(code), "{code}");
        }
    }

    #[test]
    fn civil_number_dates() {
        let date = |s: &str| birth_date(&digits(s).unwrap());
        assert_eq!(date("800101"), Ok(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()));
        assert_eq!(date("752401"), Ok(NaiveDate::from_ymd_opt(1875, 4, 1).unwrap()));
        assert_eq!(date("814101"), Ok(NaiveDate::from_ymd_opt(2081, 1, 1).unwrap()));
        // 30 February
        assert!(!BULGARIA.is_valid("7502300013"));
        assert!(matches!(
            BULGARIA.calculate("750230001"),
            Err(CheckDigitError::InvalidDate(_))
        ));
    }

    // --- branches ---

    #[test]
    fn branches() {
        assert!(BULGARIA.is_valid("8319195360016"));
        assert!(BULGARIA.is_valid("8319195360048"));
        assert!(!BULGARIA.is_valid("8319195370016"));
    }

    #[test]
    fn lengths() {
        assert!(!BULGARIA.is_valid("10851124"));
        assert_eq!(
            BULGARIA.calculate("1085112"),
            Err(CheckDigitError::InvalidLength { length: 8 })
        );
        assert_eq!(BULGARIA.calculate("00000000"), Err(CheckDigitError::ZeroSum));
    }
}
