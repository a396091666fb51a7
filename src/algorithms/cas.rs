//! CAS registry numbers (Chemical Abstracts Service), e.g. `7732-18-5` for water.

use std::ops::RangeInclusive;

use crate::core::{
    CheckDigit, CheckDigitError, ModulusEngine, is_blank, last_digit, require_code, single_digit,
};

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 10;

const BODY_GROUPS: [RangeInclusive<usize>; 2] = [2..=7, 2..=2];
const FULL_GROUPS: [RangeInclusive<usize>; 3] = [2..=7, 2..=2, 1..=1];

fn weight(value: u32, _left: usize, right: usize) -> u64 {
    u64::from(value) * ((right - 1) % 10) as u64
}

/// Remove the hyphens of the printed form. A hyphenated code must have the
/// given digit groups.
fn compact(code: &str, groups: &[RangeInclusive<usize>]) -> Option<String> {
    if !code.contains('-') {
        return Some(code.to_owned());
    }
    let parts: Vec<&str> = code.split('-').collect();
    let well_formed = parts.len() == groups.len()
        && parts
            .iter()
            .zip(groups)
            .all(|(part, group)| {
                group.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
            });
    well_formed.then(|| parts.concat())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cas;

pub static CAS: Cas = Cas;

impl Cas {
    // the check digit has weight 0
    const ENGINE: ModulusEngine = ModulusEngine::new(10, weight);
}

impl CheckDigit for Cas {
    /// Accepts `7732-18` as well as `773218`.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let plain = compact(code, &BODY_GROUPS)
            .ok_or(CheckDigitError::Malformed("CAS number groups"))?;
        single_digit(Self::ENGINE.remainder(&plain, false)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        let Some(plain) = compact(code, &FULL_GROUPS) else {
            return false;
        };
        if !(MIN_LEN..=MAX_LEN).contains(&plain.len()) {
            return false;
        }
        match (Self::ENGINE.remainder(&plain, true), last_digit(&plain)) {
            (Ok(remainder), Some(check)) => remainder == u64::from(check),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &[
        "7732-18-5", // water
        "64-17-5",   // ethanol
        "50-78-2",   // aspirin
        "58-08-2",   // caffeine
        "348-67-4",  // D-methionine
        "63-68-3",   // L-methionine
        "59-51-8",   // DL-methionine
    ];

    #[test]
    fn water() {
        assert_eq!(CAS.calculate("7732-18"), Ok("5".into()));
        assert_eq!(CAS.calculate("773218"), Ok("5".into()));
        assert!(CAS.is_valid("7732-18-5"));
        assert!(CAS.is_valid("7732185"));
    }

    #[test]
    fn valid_codes() {
        for code in VALID {
            assert!(CAS.is_valid(code), "{code}");
            let body = &code[..code.len() - 2];
            assert_eq!(CAS.calculate(body).unwrap(), &code[code.len() - 1..], "{code}");
        }
    }

    #[test]
    fn wrong_check_digit() {
        assert!(!CAS.is_valid("7732-18-4"));
        assert!(!CAS.is_valid("64-17-6"));
    }

    #[test]
    fn malformed_groups() {
        assert!(!CAS.is_valid("7732-185"));
        assert!(!CAS.is_valid("7-32-18-5"));
        assert!(!CAS.is_valid("12345678-12-5"));
        assert!(CAS.calculate("7732-1").is_err());
    }

    #[test]
    fn length_bounds() {
        assert!(!CAS.is_valid("1004"));
        assert!(CAS.is_valid("10004"));
        assert!(!CAS.is_valid("12345678901"));
    }
}
