//! The closed set of country prefixes with a VAT check digit routine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithms::Luhn;
use crate::core::{CheckDigit, CheckDigitError, Modulus11Ten, ModulusTen};

/// Germany: ISO 7064 MOD 11,10 over nine digits.
pub static GERMANY: Modulus11Ten = Modulus11Ten;

/// Croatia: ISO 7064 MOD 11,10 over eleven digits (the OIB).
pub static CROATIA: Modulus11Ten = Modulus11Ten;

/// Hungary: eight digits, weights 9, 7, 3, 1 from the left.
pub static HUNGARY: ModulusTen = ModulusTen::new(&[1, 3, 7, 9]).right_pos();

/// Italy: eleven digits checked with Luhn.
pub static ITALY: Luhn = Luhn;

/// A VAT country prefix. Greece uses `EL` and Northern Ireland `XI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    At,
    Be,
    Bg,
    Cy,
    Cz,
    De,
    Dk,
    Ee,
    El,
    Es,
    Fi,
    Fr,
    Hr,
    Hu,
    Ie,
    It,
    Lt,
    Lu,
    Lv,
    Mt,
    Nl,
    Pl,
    Pt,
    Ro,
    Se,
    Si,
    Sk,
    Xi,
}

impl Country {
    /// All countries, sorted by prefix.
    pub const ALL: [Country; 28] = [
        Self::At,
        Self::Be,
        Self::Bg,
        Self::Cy,
        Self::Cz,
        Self::De,
        Self::Dk,
        Self::Ee,
        Self::El,
        Self::Es,
        Self::Fi,
        Self::Fr,
        Self::Hr,
        Self::Hu,
        Self::Ie,
        Self::It,
        Self::Lt,
        Self::Lu,
        Self::Lv,
        Self::Mt,
        Self::Nl,
        Self::Pl,
        Self::Pt,
        Self::Ro,
        Self::Se,
        Self::Si,
        Self::Sk,
        Self::Xi,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::At => "AT",
            Self::Be => "BE",
            Self::Bg => "BG",
            Self::Cy => "CY",
            Self::Cz => "CZ",
            Self::De => "DE",
            Self::Dk => "DK",
            Self::Ee => "EE",
            Self::El => "EL",
            Self::Es => "ES",
            Self::Fi => "FI",
            Self::Fr => "FR",
            Self::Hr => "HR",
            Self::Hu => "HU",
            Self::Ie => "IE",
            Self::It => "IT",
            Self::Lt => "LT",
            Self::Lu => "LU",
            Self::Lv => "LV",
            Self::Mt => "MT",
            Self::Nl => "NL",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Ro => "RO",
            Self::Se => "SE",
            Self::Si => "SI",
            Self::Sk => "SK",
            Self::Xi => "XI",
        }
    }

    /// Look up a prefix. Case-sensitive: `"de"` is not a country.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .binary_search_by_key(&code, |c| c.code())
            .ok()
            .map(|i| Self::ALL[i])
    }

    /// The check digit routine for numbers of this country, prefix stripped.
    pub fn routine(self) -> &'static dyn CheckDigit {
        match self {
            Self::At => &super::AUSTRIA,
            Self::Be => &super::BELGIUM,
            Self::Bg => &super::BULGARIA,
            Self::Cy => &super::CYPRUS,
            Self::Cz => &super::CZECH_REPUBLIC,
            Self::De => &GERMANY,
            Self::Dk => &super::DENMARK,
            Self::Ee => &super::ESTONIA,
            Self::El => &super::GREECE,
            Self::Es => &super::SPAIN,
            Self::Fi => &super::FINLAND,
            Self::Fr => &super::FRANCE,
            Self::Hr => &CROATIA,
            Self::Hu => &HUNGARY,
            Self::Ie => &super::IRELAND,
            Self::It => &ITALY,
            Self::Lt => &super::LITHUANIA,
            Self::Lu => &super::LUXEMBOURG,
            Self::Lv => &super::LATVIA,
            Self::Mt => &super::MALTA,
            Self::Nl => &super::NETHERLANDS,
            Self::Pl => &super::POLAND,
            Self::Pt => &super::PORTUGAL,
            Self::Ro => &super::ROMANIA,
            Self::Se => &super::SWEDEN,
            Self::Si => &super::SLOVENIA,
            Self::Sk => &super::SLOVAKIA,
            Self::Xi => &super::UNITED_KINGDOM,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = CheckDigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CheckDigitError::InvalidCountryCode(s.to_string()))
    }
}
