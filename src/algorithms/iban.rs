//! IBAN check digits (ISO 13616, MOD 97-10) and the Czech national bank
//! account check embedded in Czech IBANs.

use crate::core::{
    CheckDigit, CheckDigitError, ModulusEngine, is_blank, mod97_stream, require_code, split_tail,
    two_digits,
};

const MIN_CODE_LEN: usize = 5;
const MODULUS: u64 = 97;

/// Check digit pairs that can never be produced.
const IMPOSSIBLE_CHECKS: [&str; 3] = ["00", "01", "99"];

/// Drop ASCII whitespace so grouped print forms (`GB82 WEST ...`) are accepted.
fn compact(code: &str) -> String {
    code.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Move the country code and check digits to the end and reduce mod 97.
fn modulus(code: &str) -> Result<u64, CheckDigitError> {
    let (head, tail) = code
        .split_at_checked(4)
        .ok_or(CheckDigitError::Malformed("country code and check digits"))?;
    let rotated = format!("{tail}{head}");
    Ok(mod97_stream(&rotated, MODULUS)? % MODULUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iban;

pub static IBAN: Iban = Iban;

impl CheckDigit for Iban {
    /// `code` is the full IBAN; whatever sits at positions 3-4 is replaced
    /// by `00` before calculating.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let code = compact(code);
        let length = code.chars().count();
        if length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength { length });
        }
        let (Some(country), Some(rest)) = (code.get(..2), code.get(4..)) else {
            return Err(CheckDigitError::Malformed("country code and check digits"));
        };
        let remainder = modulus(&format!("{country}00{rest}"))?;
        two_digits(98 - remainder)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        let code = compact(code);
        if code.chars().count() < MIN_CODE_LEN {
            return false;
        }
        match code.get(2..4) {
            Some(check) if !IMPOSSIBLE_CHECKS.contains(&check) => {}
            _ => return false,
        }
        matches!(modulus(&code), Ok(1))
    }
}

// --- czech bank account ---

const PREFIX_LEN: usize = 6;
const ACCOUNT_LEN: usize = 10;
const CNB_WEIGHTS: [u32; ACCOUNT_LEN] = [6, 3, 7, 9, 10, 5, 8, 4, 2, 1];

/// A 6-digit prefix uses the first six weights, a 10-digit account all ten.
fn cnb_weight(value: u32, left: usize, _right: usize) -> u64 {
    u64::from(value * CNB_WEIGHTS[left - 1])
}

/// The Czech national bank (CNB) account check: the 16 trailing characters of
/// a Czech IBAN are a 6-digit account prefix and a 10-digit account number,
/// each a multiple of 11 under the same weights. An all-zero prefix means
/// "no prefix" and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cnb;

pub static CNB: Cnb = Cnb;

impl Cnb {
    const ENGINE: ModulusEngine = ModulusEngine::new(11, cnb_weight);

    fn parts(code: &str) -> Option<(&str, &str)> {
        let (head, account) = split_tail(code, ACCOUNT_LEN)?;
        let (_, prefix) = split_tail(head, PREFIX_LEN)?;
        Some((prefix, account))
    }
}

impl CheckDigit for Cnb {
    /// Check digit of the account number, given all but its last digit.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let (_, account) = split_tail(code, ACCOUNT_LEN - 1).ok_or(
            CheckDigitError::InvalidLength {
                length: code.chars().count(),
            },
        )?;
        Self::ENGINE.calculate(account)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        let Some((prefix, account)) = Self::parts(code) else {
            return false;
        };
        let prefix_ok = prefix == "000000" || matches!(Self::ENGINE.remainder(prefix, true), Ok(0));
        prefix_ok && matches!(Self::ENGINE.remainder(account, true), Ok(0))
    }
}
