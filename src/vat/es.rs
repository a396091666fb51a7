//! Spain: the first character selects the scheme.
//!
//! | First        | Holder                       | Check                      |
//! |--------------|------------------------------|----------------------------|
//! | digit        | citizen (DNI)                | letter, number mod 23      |
//! | `XYZKLM`     | foreigner or person w/o DNI  | letter, digits mod 23      |
//! | `NPQRSW`     | foreign or public entity     | Luhn as a letter `J`, `A`-`I` |
//! | other letter | company                      | Luhn digit                 |

use super::check_tail;
use crate::algorithms::Luhn;
use crate::core::{
    CheckDigit, CheckDigitError, digits, is_all_zero, letter, require_code, single_digit,
};

const MIN_LEN: usize = 5;
const DNI_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";
const LUHN_LETTERS: &str = "JABCDEFGHI";
const NIE_PREFIXES: &str = "XYZKLM";
const LETTER_CHECK_PREFIXES: &str = "NPQRSW";

fn entity_kind(c: char) -> Option<&'static str> {
    Some(match c {
        'A' => "public limited company",
        'B' => "limited liability company",
        'C' => "general partnership",
        'D' => "limited partnership",
        'E' => "community of property",
        'F' => "cooperative",
        'G' => "association or foundation",
        'H' => "community of owners",
        'J' => "civil partnership",
        'U' => "temporary business association",
        'V' => "other entity",
        _ => return None,
    })
}

/// Letter for a plain run of digits.
fn dni_letter(number: &str) -> Result<String, CheckDigitError> {
    let remainder = digits(number)?
        .iter()
        .fold(0, |r, &d| (r * 10 + u64::from(d)) % 23);
    if is_all_zero(number) {
        return Err(CheckDigitError::ZeroSum);
    }
    letter(DNI_LETTERS, remainder)
}

fn luhn_value(number: &str) -> Result<u64, CheckDigitError> {
    let remainder = Luhn::ENGINE.remainder(number, false)?;
    Ok((10 - remainder) % 10)
}

/// Map errors from the part after the prefix back to positions in the full code.
fn shifted(err: CheckDigitError) -> CheckDigitError {
    match err {
        CheckDigitError::InvalidCharacter { position, character } => {
            CheckDigitError::InvalidCharacter {
                position: position + 1,
                character,
            }
        }
        other => other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spain;

pub static SPAIN: Spain = Spain;

impl CheckDigit for Spain {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let mut chars = code.chars();
        let Some(first) = chars.next() else {
            return Err(CheckDigitError::MissingCode);
        };
        let rest = chars.as_str();
        if first.is_ascii_digit() {
            return dni_letter(code);
        }
        if NIE_PREFIXES.contains(first) {
            return dni_letter(rest).map_err(shifted);
        }
        if LETTER_CHECK_PREFIXES.contains(first) {
            return letter(LUHN_LETTERS, luhn_value(rest).map_err(shifted)?);
        }
        if !first.is_ascii_uppercase() {
            return Err(CheckDigitError::InvalidCharacter {
                position: 1,
                character: first,
            });
        }
        if let Some(kind) = entity_kind(first) {
            tracing::debug!(kind, "company number");
        }
        single_digit(luhn_value(rest).map_err(shifted)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        code.len() >= MIN_LEN && check_tail(self, code, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        for code in [
            "A60195278", "F20033361", "A13585625", "54362315K", "A58818501", "X2482300W",
            "B58378431", "X5253868R", "M1234567L", "J99216582", "B64717838", "B28318236",
            "F20096525", "B63879597", "J61863718", "W8265365J", "B86670460", "Q2876031B",
            "N0112768G", "A10215",
        ] {
            assert!(SPAIN.is_valid(code), "{code}");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in ["14567852X", "54362315Z", "X2482300A", "J99216583", "A1021", "00000000T"] {
            assert!(!SPAIN.is_valid(code), "{code}");
        }
    }

    // --- calculation ---

    #[test]
    fn each_scheme() {
        assert_eq!(SPAIN.calculate("54362315"), Ok("K".into()));
        assert_eq!(SPAIN.calculate("X2482300"), Ok("W".into()));
        assert_eq!(SPAIN.calculate("Q2876031"), Ok("B".into()));
        assert_eq!(SPAIN.calculate("A6019527"), Ok("8".into()));
    }

    #[test]
    fn bad_prefix() {
        assert_eq!(
            SPAIN.calculate("a6019527"),
            Err(CheckDigitError::InvalidCharacter {
                position: 1,
                character: 'a'
            })
        );
        assert_eq!(
            SPAIN.calculate("X24A2300"),
            Err(CheckDigitError::InvalidCharacter {
                position: 4,
                character: 'A'
            })
        );
        assert_eq!(SPAIN.calculate("00000000"), Err(CheckDigitError::ZeroSum));
    }
}
