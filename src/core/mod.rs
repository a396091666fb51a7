//! The check digit engine: the [`CheckDigit`] trait, the error type, the
//! positional weighting engine and its modulus variants.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::core::*;
//!
//! fn weight(value: u32, _left: usize, right: usize) -> u64 {
//!     u64::from(value) * right as u64
//! }
//!
//! // ISBN-10 style: weight = position from the right, X for 10
//! const ENGINE: ModulusEngine = ModulusEngine::mod11_x(weight);
//! assert_eq!(ENGINE.calculate("020163385").unwrap(), "X");
//! assert!(ENGINE.is_valid("020163385X"));
//! ```

mod check_digit;
mod error;
mod modulus;
mod modulus11_ten;
mod modulus11x;
mod modulus97;
mod modulus_ten;

pub use check_digit::{CheckDigit, sum_digits};
pub use error::CheckDigitError;
pub use modulus::{
    CharValueFn, ModulusEngine, RenderFn, WeightFn, alphanumeric, decimal_digit, digit_or_x,
    digit_or_x_text, positional_sum, single_digit, two_digits,
};
pub use modulus_ten::ModulusTen;
pub use modulus11_ten::{MODULUS_11_TEN, Modulus11Ten};
pub use modulus11x::{MODULUS_11_X, Modulus11X, by_right_pos};
pub use modulus97::{CHECK_DIGIT_LEN, MODULUS_97, Modulus97, stream as mod97_stream};

pub(crate) use check_digit::{
    digits, is_all_zero, is_blank, last_digit, parse_digits, require_code, split_tail,
};
pub(crate) use modulus::letter;
