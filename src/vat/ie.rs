//! Ireland: seven digits, a check letter, and since 2013 an optional ninth
//! letter (`W` or `A`-`I`) that takes part in the check.
//!
//! `calculate` takes the seven digits, followed by the ninth letter when
//! there is one.

use crate::core::{CheckDigit, CheckDigitError, digits, is_all_zero, letter, require_code};

const DIGITS_LEN: usize = 7;
const WEIGHTS: [u32; DIGITS_LEN] = [8, 7, 6, 5, 4, 3, 2];
const NINTH_WEIGHT: u64 = 9;
const CHECK_LETTERS: &str = "WABCDEFGHIJKLMNOPQRSTUV";

/// `W` = 0, `A` = 1 … `I` = 9.
fn ninth_letter_value(c: char) -> Option<u64> {
    match c {
        'W' => Some(0),
        'A'..='I' => Some(u64::from(c as u32 - 'A' as u32 + 1)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ireland;

pub static IRELAND: Ireland = Ireland;

impl CheckDigit for Ireland {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let (number, ninth) = code
            .split_at_checked(DIGITS_LEN)
            .ok_or(CheckDigitError::InvalidLength {
                length: code.chars().count(),
            })?;
        let body = digits(number)?;
        if is_all_zero(number) {
            return Err(CheckDigitError::ZeroSum);
        }
        let extra = match ninth.chars().collect::<Vec<_>>().as_slice() {
            [] => 0,
            [c] => ninth_letter_value(*c).ok_or(CheckDigitError::InvalidCharacter {
                position: DIGITS_LEN + 2,
                character: *c,
            })?,
            _ => {
                return Err(CheckDigitError::InvalidLength {
                    length: code.chars().count(),
                });
            }
        };
        let total: u64 = body
            .iter()
            .zip(WEIGHTS)
            .map(|(&d, w)| u64::from(d * w))
            .sum::<u64>()
            + extra * NINTH_WEIGHT;
        letter(CHECK_LETTERS, total % 23)
    }

    /// The check letter is the eighth character, whatever follows it.
    fn is_valid(&self, code: &str) -> bool {
        if !matches!(code.len(), 8 | 9) {
            return false;
        }
        let (Some(number), Some(check), Some(ninth)) =
            (code.get(..DIGITS_LEN), code.get(DIGITS_LEN..=DIGITS_LEN), code.get(DIGITS_LEN + 1..))
        else {
            return false;
        };
        matches!(self.calculate(&format!("{number}{ninth}")), Ok(expected) if expected == check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in [
            "3628739L",
            "3628739UA",
            "9700053D",
            "6388047V",
            "8473625E",
            "6433435F",
            "6433435OA",
            "0936378V",
        ] {
            assert!(IRELAND.is_valid(code), "{code}");
        }
    }

    #[test]
    fn ninth_letter_changes_the_check() {
        assert_eq!(IRELAND.calculate("3628739"), Ok("L".into()));
        assert_eq!(IRELAND.calculate("3628739A"), Ok("U".into()));
        assert_eq!(IRELAND.calculate("3628739W"), Ok("L".into()));
    }

    #[test]
    fn invalid_numbers() {
        for code in ["99509582", "0000000IA", "3628739M", "3628739LZ", "3628739"] {
            assert!(!IRELAND.is_valid(code), "{code}");
        }
        assert_eq!(
            IRELAND.calculate("3628739Z"),
            Err(CheckDigitError::InvalidCharacter {
                position: 9,
                character: 'Z'
            })
        );
    }
}
