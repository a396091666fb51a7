//! The positional weighting engine shared by all modulus-N routines.
//!
//! Every character of a code is converted to a number, multiplied by a weight
//! that depends on its position, and the products are summed. Positions are
//! counted both ways, 1-based:
//!
//! - `left_pos`: from the left.
//! - `right_pos`: from the right, where the check digit sits at position 1.
//!   When the code is a body without its check digit, the body's last
//!   character is at `right_pos` 2.
//!
//! [`ModulusEngine`] is assembled from plain function pointers so routines can
//! be declared as `static` values.

use super::check_digit::{CheckDigit, is_blank, require_code};
use super::error::CheckDigitError;

/// Weight a character value at `(left_pos, right_pos)`.
pub type WeightFn = fn(value: u32, left_pos: usize, right_pos: usize) -> u64;

/// Map a character at `(left_pos, right_pos)` to its numeric value.
pub type CharValueFn = fn(character: char, left_pos: usize, right_pos: usize) -> Option<u32>;

/// Render a computed value as check digit text.
pub type RenderFn = fn(value: u64) -> Result<String, CheckDigitError>;

/// Sum `f(character, left_pos, right_pos)` over the code.
///
/// Fails with [`CheckDigitError::ZeroSum`] when the total is zero.
pub fn positional_sum<F>(
    code: &str,
    includes_check_digit: bool,
    mut f: F,
) -> Result<u64, CheckDigitError>
where
    F: FnMut(char, usize, usize) -> Result<u64, CheckDigitError>,
{
    let len = code.chars().count() + usize::from(!includes_check_digit);
    let mut total: u64 = 0;
    for (i, c) in code.chars().enumerate() {
        total += f(c, i + 1, len - i)?;
    }
    if total == 0 {
        return Err(CheckDigitError::ZeroSum);
    }
    Ok(total)
}

/// A modulus-N check digit algorithm built by composition.
#[derive(Clone, Copy)]
pub struct ModulusEngine {
    modulus: u64,
    weight: WeightFn,
    char_value: CharValueFn,
    render: RenderFn,
}

impl std::fmt::Debug for ModulusEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModulusEngine")
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

impl ModulusEngine {
    /// Decimal digits in, a single decimal digit out.
    pub const fn new(modulus: u64, weight: WeightFn) -> Self {
        Self {
            modulus,
            weight,
            char_value: decimal_digit,
            render: single_digit,
        }
    }

    /// Modulus 11 where the check position may hold `X` for 10.
    pub const fn mod11_x(weight: WeightFn) -> Self {
        Self {
            modulus: 11,
            weight,
            char_value: digit_or_x,
            render: digit_or_x_text,
        }
    }

    pub const fn with_char_value(self, char_value: CharValueFn) -> Self {
        Self { char_value, ..self }
    }

    pub const fn with_render(self, render: RenderFn) -> Self {
        Self { render, ..self }
    }

    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Numeric value of one character, or [`CheckDigitError::InvalidCharacter`].
    pub fn char_value(
        &self,
        character: char,
        left_pos: usize,
        right_pos: usize,
    ) -> Result<u32, CheckDigitError> {
        (self.char_value)(character, left_pos, right_pos).ok_or(
            CheckDigitError::InvalidCharacter {
                position: left_pos,
                character,
            },
        )
    }

    /// The weighted sum of all characters. Zero is an error.
    pub fn weighted_sum(
        &self,
        code: &str,
        includes_check_digit: bool,
    ) -> Result<u64, CheckDigitError> {
        positional_sum(code, includes_check_digit, |c, left, right| {
            let value = self.char_value(c, left, right)?;
            Ok((self.weight)(value, left, right))
        })
    }

    /// `weighted_sum mod N`.
    pub fn remainder(
        &self,
        code: &str,
        includes_check_digit: bool,
    ) -> Result<u64, CheckDigitError> {
        Ok(self.weighted_sum(code, includes_check_digit)? % self.modulus)
    }

    pub fn render(&self, value: u64) -> Result<String, CheckDigitError> {
        (self.render)(value)
    }
}

impl CheckDigit for ModulusEngine {
    /// `(N - remainder) mod N`, rendered.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let remainder = self.remainder(code, false)?;
        self.render((self.modulus - remainder) % self.modulus)
    }

    /// Valid when the weighted sum of the full code is a multiple of N.
    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        matches!(self.remainder(code, true), Ok(0))
    }
}

// --- character mappings ---

pub fn decimal_digit(c: char, _left: usize, _right: usize) -> Option<u32> {
    c.to_digit(10)
}

/// Digits anywhere, `X` = 10 at the check position.
pub fn digit_or_x(c: char, _left: usize, right: usize) -> Option<u32> {
    if right == 1 && c == 'X' {
        Some(10)
    } else {
        c.to_digit(10)
    }
}

/// `0-9` = 0..9, `A-Z` (either case) = 10..35.
pub fn alphanumeric(c: char, _left: usize, _right: usize) -> Option<u32> {
    c.to_digit(36)
}

// --- renderings ---

pub fn single_digit(value: u64) -> Result<String, CheckDigitError> {
    if value <= 9 {
        Ok(value.to_string())
    } else {
        Err(CheckDigitError::UnsupportedCheckDigitValue(value))
    }
}

pub fn digit_or_x_text(value: u64) -> Result<String, CheckDigitError> {
    if value == 10 {
        Ok("X".into())
    } else {
        single_digit(value)
    }
}

/// Two zero-padded decimal digits.
pub fn two_digits(value: u64) -> Result<String, CheckDigitError> {
    if value <= 99 {
        Ok(format!("{value:02}"))
    } else {
        Err(CheckDigitError::UnsupportedCheckDigitValue(value))
    }
}

/// A letter from `alphabet`, indexed by value.
pub(crate) fn letter(alphabet: &str, value: u64) -> Result<String, CheckDigitError> {
    usize::try_from(value)
        .ok()
        .and_then(|i| alphabet.as_bytes().get(i))
        .map(|&b| char::from(b).to_string())
        .ok_or(CheckDigitError::UnsupportedCheckDigitValue(value))
}
