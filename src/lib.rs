//! # pruefziffer
//!
//! Check digit calculation and validation for structured identifiers:
//! payment cards, bank accounts, securities, books, chemical substances and
//! EU VAT identification numbers.
//!
//! Every routine is a stateless `static` implementing [`CheckDigit`]:
//! `calculate` takes a code without its check digit and returns the check
//! digit text, `is_valid` takes the full code.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::CheckDigit;
//! use pruefziffer::algorithms::{IBAN, ISBN, LUHN};
//!
//! assert_eq!(LUHN.calculate("7992739871").unwrap(), "3");
//! assert!(ISBN.is_valid("9780201633856"));
//! assert!(IBAN.is_valid("GB29 NWBK 6016 1331 9268 19"));
//! ```
//!
//! VAT numbers carry their country prefix:
//!
//! ```rust
//! use pruefziffer::CheckDigit;
//! use pruefziffer::vat::VAT_IN;
//!
//! assert!(VAT_IN.is_valid("ATU13585627"));
//! assert!(VAT_IN.calculate("ZZ123").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Engine, modulus variants, named algorithms, [`RoutineKind`] |
//! | `vat` (default) | Per-country VAT routines and the VAT dispatcher |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod algorithms;

#[cfg(feature = "core")]
mod kind;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "core")]
pub use crate::core::{CheckDigit, CheckDigitError};
#[cfg(feature = "core")]
pub use kind::RoutineKind;
