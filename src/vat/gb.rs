//! United Kingdom (Northern Ireland, `XI`): seven digits and two check digits,
//! optionally followed by a three digit branch number.
//!
//! Two schemes are live. The old one makes `sum + check` a multiple of 97;
//! numbers issued since 2010 use `sum + check + 55`. Both are accepted on
//! validation. `calculate` uses the old scheme for remainders below 42 and
//! the new one from 42 up.

use crate::core::{CheckDigit, CheckDigitError, digits, parse_digits, require_code, two_digits};

const BODY_LEN: usize = 7;
const LEN: usize = 9;
const BRANCH_LEN: usize = 12;
const WEIGHTS: [u32; BODY_LEN] = [8, 7, 6, 5, 4, 3, 2];
const NEW_SCHEME_OFFSET: u64 = 55;

fn weighted_sum(body: &str) -> Result<u64, CheckDigitError> {
    let total = digits(body)?
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u64::from(d * w))
        .sum();
    if total == 0 {
        return Err(CheckDigitError::ZeroSum);
    }
    Ok(total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitedKingdom;

pub static UNITED_KINGDOM: UnitedKingdom = UnitedKingdom;

impl CheckDigit for UnitedKingdom {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let length = code.chars().count();
        if length != BODY_LEN {
            return Err(CheckDigitError::InvalidLength { length: length + 2 });
        }
        let remainder = weighted_sum(code)? % 97;
        let check = match remainder {
            0 => 0,
            r if r >= 97 - NEW_SCHEME_OFFSET => {
                tracing::debug!(remainder, "issuing under the 9755 scheme");
                97 + 97 - NEW_SCHEME_OFFSET - r
            }
            r => 97 - r,
        };
        two_digits(check)
    }

    fn is_valid(&self, code: &str) -> bool {
        let number = match code.len() {
            LEN => code,
            BRANCH_LEN if code.bytes().all(|b| b.is_ascii_digit()) => &code[..LEN],
            _ => return false,
        };
        let Some((body, check)) = number.split_at_checked(BODY_LEN) else {
            return false;
        };
        let Some(check) = parse_digits(check) else {
            return false;
        };
        match weighted_sum(body) {
            Ok(total) => {
                (total + check) % 97 == 0 || (total + check + NEW_SCHEME_OFFSET) % 97 == 0
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- validation ---

    #[test]
    fn both_schemes() {
        for code in [
            "110305878", "366303068", "174918964", "434031494", "613451470", "980780684",
            "888801276", "888850259", "888851256", "426985160", "439432385", "439268659",
            "428671865", "432880687", "430510547", "427092792", "427264494", "427661973",
            "428756265", "438017796", "426751194", "428819561", "440211846", "436338390",
            "433477292",
        ] {
            assert!(UNITED_KINGDOM.is_valid(code), "{code}");
        }
    }

    #[test]
    fn branch_suffix() {
        assert!(UNITED_KINGDOM.is_valid("980780684001"));
        assert!(!UNITED_KINGDOM.is_valid("98078068400A"));
        assert!(!UNITED_KINGDOM.is_valid("9807806840"));
    }

    #[test]
    fn rejects() {
        for code in ["980780685", "000000000", "98078068X", "9807806+4", "+80780684", "98078068"] {
            assert!(!UNITED_KINGDOM.is_valid(code), "{code}");
        }
    }

    // --- calculation ---

    #[test]
    fn issues_check_digits() {
        for code in ["110305878", "980780684", "888801276", "433477292"] {
            assert_eq!(UNITED_KINGDOM.calculate(&code[..7]), Ok(code[7..].to_string()), "{code}");
        }
    }

    #[test]
    fn body_length() {
        assert_eq!(
            UNITED_KINGDOM.calculate("12345678"),
            Err(CheckDigitError::InvalidLength { length: 10 })
        );
        assert_eq!(UNITED_KINGDOM.calculate("0000000"), Err(CheckDigitError::ZeroSum));
    }
}
