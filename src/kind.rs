//! [`RoutineKind`]: every routine in the crate by name.
//!
//! Use it where the routine is configuration rather than code, e.g. a field
//! definition read from JSON that says which check applies.
//!
//! ```rust
//! use pruefziffer::{CheckDigit, RoutineKind};
//!
//! let kind: RoutineKind = "isbn".parse().unwrap();
//! assert!(kind.routine().is_valid("9780201633856"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithms;
use crate::core::{CheckDigit, CheckDigitError, MODULUS_11_TEN, MODULUS_11_X, MODULUS_97};

/// Names a check digit routine. Serialized in kebab case (`"ec-number"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RoutineKind {
    Aba,
    Cas,
    Cnb,
    Cusip,
    Ean13,
    EcIndexNumber,
    EcNumber,
    Iban,
    Isbn,
    Isbn10,
    Isin,
    Issn,
    Luhn,
    Modulus11Ten,
    Modulus11X,
    Modulus97,
    Sedol,
    TidDe,
    #[cfg(feature = "vat")]
    VatIn,
    Verhoeff,
}

impl RoutineKind {
    #[cfg(not(feature = "vat"))]
    pub const ALL: &'static [RoutineKind] = &[
        Self::Aba,
        Self::Cas,
        Self::Cnb,
        Self::Cusip,
        Self::Ean13,
        Self::EcIndexNumber,
        Self::EcNumber,
        Self::Iban,
        Self::Isbn,
        Self::Isbn10,
        Self::Isin,
        Self::Issn,
        Self::Luhn,
        Self::Modulus11Ten,
        Self::Modulus11X,
        Self::Modulus97,
        Self::Sedol,
        Self::TidDe,
        Self::Verhoeff,
    ];

    #[cfg(feature = "vat")]
    pub const ALL: &'static [RoutineKind] = &[
        Self::Aba,
        Self::Cas,
        Self::Cnb,
        Self::Cusip,
        Self::Ean13,
        Self::EcIndexNumber,
        Self::EcNumber,
        Self::Iban,
        Self::Isbn,
        Self::Isbn10,
        Self::Isin,
        Self::Issn,
        Self::Luhn,
        Self::Modulus11Ten,
        Self::Modulus11X,
        Self::Modulus97,
        Self::Sedol,
        Self::TidDe,
        Self::VatIn,
        Self::Verhoeff,
    ];

    /// Kebab-case name, as used by serde.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aba => "aba",
            Self::Cas => "cas",
            Self::Cnb => "cnb",
            Self::Cusip => "cusip",
            Self::Ean13 => "ean13",
            Self::EcIndexNumber => "ec-index-number",
            Self::EcNumber => "ec-number",
            Self::Iban => "iban",
            Self::Isbn => "isbn",
            Self::Isbn10 => "isbn10",
            Self::Isin => "isin",
            Self::Issn => "issn",
            Self::Luhn => "luhn",
            Self::Modulus11Ten => "modulus11-ten",
            Self::Modulus11X => "modulus11-x",
            Self::Modulus97 => "modulus97",
            Self::Sedol => "sedol",
            Self::TidDe => "tid-de",
            #[cfg(feature = "vat")]
            Self::VatIn => "vat-in",
            Self::Verhoeff => "verhoeff",
        }
    }

    pub fn routine(self) -> &'static dyn CheckDigit {
        match self {
            Self::Aba => &algorithms::ABA,
            Self::Cas => &algorithms::CAS,
            Self::Cnb => &algorithms::CNB,
            Self::Cusip => &algorithms::CUSIP,
            Self::Ean13 => &algorithms::EAN13,
            Self::EcIndexNumber => &algorithms::EC_INDEX_NUMBER,
            Self::EcNumber => &algorithms::EC_NUMBER,
            Self::Iban => &algorithms::IBAN,
            Self::Isbn => &algorithms::ISBN,
            Self::Isbn10 => &algorithms::ISBN10,
            Self::Isin => &algorithms::ISIN,
            Self::Issn => &algorithms::ISSN,
            Self::Luhn => &algorithms::LUHN,
            Self::Modulus11Ten => &MODULUS_11_TEN,
            Self::Modulus11X => &MODULUS_11_X,
            Self::Modulus97 => &MODULUS_97,
            Self::Sedol => &algorithms::SEDOL,
            Self::TidDe => &algorithms::TID_DE,
            #[cfg(feature = "vat")]
            Self::VatIn => &crate::vat::VAT_IN,
            Self::Verhoeff => &algorithms::VERHOEFF,
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutineKind {
    type Err = CheckDigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or(CheckDigitError::Malformed("unknown routine name"))
    }
}
