//! Named check digit algorithms for payment, securities, book and chemical
//! identifiers.
//!
//! | Routine | Identifier |
//! |---------|------------|
//! | [`LUHN`] | payment cards, many national numbers |
//! | [`VERHOEFF`] | dihedral group check, Aadhaar |
//! | [`ABA`] | US bank routing numbers |
//! | [`CUSIP`], [`SEDOL`], [`ISIN`] | securities |
//! | [`ISBN10`], [`EAN13`], [`ISBN`], [`ISSN`] | books, serials, retail barcodes |
//! | [`IBAN`], [`CNB`] | bank accounts |
//! | [`CAS`], [`EC_NUMBER`], [`EC_INDEX_NUMBER`] | chemical substances |
//! | [`TID_DE`] | German tax identification number |

mod aba;
mod cas;
mod cusip;
mod ec;
mod iban;
mod isbn;
mod isin;
mod issn;
mod luhn;
mod sedol;
mod tid_de;
mod verhoeff;

pub use aba::{ABA, Aba};
pub use cas::{CAS, Cas};
pub use cusip::{CUSIP, Cusip};
pub use ec::{EC_INDEX_NUMBER, EC_NUMBER, EcIndexNumber, EcNumber};
pub use iban::{CNB, Cnb, IBAN, Iban};
pub use isbn::{EAN13, Ean13, ISBN, ISBN10, Isbn, Isbn10};
pub use isin::{ISIN, Isin};
pub use issn::{ISSN, Issn};
pub use luhn::{LUHN, Luhn};
pub use sedol::{SEDOL, Sedol};
pub use tid_de::{TID_DE, TidDe};
pub use verhoeff::{VERHOEFF, Verhoeff};
