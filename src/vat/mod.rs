//! EU VAT identification number check digits, one routine per country, and
//! the [`VAT_IN`] dispatcher that picks the routine from the country prefix.
//!
//! Country routines take the number without its prefix.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::CheckDigit;
//! use pruefziffer::vat::*;
//!
//! assert!(VAT_IN.is_valid("DE136695976"));
//! assert_eq!(VAT_IN.calculate("ATU1358562").unwrap(), "7");
//!
//! assert!(FRANCE.is_valid("K7399859412"));
//! assert_eq!("NL".parse::<Country>().unwrap(), Country::Nl);
//! ```

mod at;
mod be;
mod bg;
mod country;
mod cy;
mod cz;
mod dispatch;
mod dk;
mod ee;
mod el;
mod es;
mod fi;
mod fr;
mod gb;
mod ie;
mod lt;
mod lu;
mod lv;
mod mt;
mod nl;
mod pl;
mod pt;
mod ro;
mod se;
mod si;
mod sk;

use crate::core::{CheckDigit, split_tail};

pub use at::{AUSTRIA, Austria};
pub use be::{BELGIUM, Belgium};
pub use bg::{BULGARIA, Bulgaria};
pub use country::{Country, CROATIA, GERMANY, HUNGARY, ITALY};
pub use cy::{CYPRUS, Cyprus};
pub use cz::{CZECH_REPUBLIC, CzechRepublic};
pub use dispatch::{VAT_IN, VatIn};
pub use dk::{DENMARK, Denmark};
pub use ee::{ESTONIA, Estonia};
pub use el::{GREECE, Greece};
pub use es::{SPAIN, Spain};
pub use fi::{FINLAND, Finland};
pub use fr::{FRANCE, France};
pub use gb::{UNITED_KINGDOM, UnitedKingdom};
pub use ie::{IRELAND, Ireland};
pub use lt::{LITHUANIA, Lithuania};
pub use lu::{LUXEMBOURG, Luxembourg};
pub use lv::{LATVIA, Latvia};
pub use mt::{MALTA, Malta};
pub use nl::{NETHERLANDS, Netherlands};
pub use pl::{POLAND, Poland};
pub use pt::{PORTUGAL, Portugal};
pub use ro::{ROMANIA, Romania};
pub use se::{SWEDEN, Sweden};
pub use si::{SLOVENIA, Slovenia};
pub use sk::{SLOVAKIA, Slovakia};

/// `true` when the last `n` characters equal `routine.calculate` of the rest.
pub(crate) fn check_tail<R: CheckDigit + ?Sized>(routine: &R, code: &str, n: usize) -> bool {
    let Some((body, check)) = split_tail(code, n) else {
        return false;
    };
    matches!(routine.calculate(body), Ok(expected) if expected == check)
}
