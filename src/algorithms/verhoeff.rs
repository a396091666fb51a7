//! Verhoeff check digit, built on the dihedral group D5.
//!
//! Detects every single-digit error and every adjacent transposition.
//! The tables are the published ones and are used as-is.

use crate::core::{CheckDigit, CheckDigitError, is_blank, require_code};

/// Multiplication table of D5.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation, period 8.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verhoeff;

pub static VERHOEFF: Verhoeff = Verhoeff;

impl Verhoeff {
    /// Fold the digits right to left. A body is shifted one position,
    /// leaving room for the check digit.
    fn checksum(code: &str, includes_check_digit: bool) -> Result<u8, CheckDigitError> {
        let len = code.chars().count();
        let mut checksum = 0u8;
        for (i, c) in code.chars().rev().enumerate() {
            let num = c
                .to_digit(10)
                .ok_or(CheckDigitError::invalid_char(len - i - 1, c))? as usize;
            let pos = if includes_check_digit { i } else { i + 1 };
            checksum = D[checksum as usize][P[pos % 8][num] as usize];
        }
        Ok(checksum)
    }
}

impl CheckDigit for Verhoeff {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let checksum = Self::checksum(code, false)?;
        Ok(INV[checksum as usize].to_string())
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        matches!(Self::checksum(code, true), Ok(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_vectors() {
        for code in ["2363", "15", "1428570", "12345678902"] {
            assert!(VERHOEFF.is_valid(code), "{code}");
            let (body, check) = code.split_at(code.len() - 1);
            assert_eq!(VERHOEFF.calculate(body).unwrap(), check, "{code}");
        }
    }

    #[test]
    fn single_digit_errors() {
        for d in "0124567890".chars().filter(|&d| d != '3') {
            assert!(!VERHOEFF.is_valid(&format!("236{d}")));
        }
        assert!(!VERHOEFF.is_valid("2463"));
    }

    #[test]
    fn adjacent_transposition() {
        assert!(!VERHOEFF.is_valid("3263"));
        assert!(!VERHOEFF.is_valid("2633"));
    }

    #[test]
    fn non_digits() {
        assert_eq!(
            VERHOEFF.calculate("23a"),
            Err(CheckDigitError::InvalidCharacter {
                position: 3,
                character: 'a'
            })
        );
        assert!(!VERHOEFF.is_valid("236X"));
    }
}
