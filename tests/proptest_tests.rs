//! Property-based tests over the routine table.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "vat")]

use proptest::prelude::*;
use pruefziffer::algorithms::{ABA, IBAN, ISIN, LUHN, VERHOEFF};
use pruefziffer::vat::{Country, VAT_IN};
use pruefziffer::{CheckDigit, RoutineKind};

/// Body shapes per country. FR, IE, NL and SE are missing: their check
/// characters are not a plain suffix of the number.
const VAT_BODIES: &[(Country, &str)] = &[
    (Country::At, "U[0-9]{7}"),
    (Country::Be, "0[0-9]{7}"),
    (Country::Bg, "[0-9]{8}"),
    (Country::Cy, "[0-9]{8}"),
    (Country::Cz, "[0-8][0-9]{6}"),
    (Country::De, "[1-9][0-9]{7}"),
    (Country::Dk, "[1-9][0-9]{6}"),
    (Country::Ee, "[0-9]{8}"),
    (Country::El, "[0-9]{8}"),
    (Country::Es, "[0-9]{8}"),
    (Country::Fi, "[0-9]{7}"),
    (Country::Hr, "[0-9]{10}"),
    (Country::Hu, "[0-9]{7}"),
    (Country::It, "[0-9]{10}"),
    (Country::Lt, "[0-9]{8}"),
    (Country::Lu, "[0-9]{6}"),
    (Country::Lv, "[4-9][0-9]{9}"),
    (Country::Mt, "[1-9][0-9]{5}"),
    (Country::Pl, "[0-9]{9}"),
    (Country::Pt, "[0-9]{8}"),
    (Country::Ro, "[1-9][0-9]{0,8}"),
    (Country::Si, "[1-9][0-9]{6}"),
    (Country::Sk, "[1-9][0-9]{8}"),
    (Country::Xi, "[0-9]{7}"),
];

/// Body shapes for the named algorithms and the generic modulus routines.
const ALGORITHM_BODIES: &[(RoutineKind, &str)] = &[
    (RoutineKind::Ean13, "[0-9]{12}"),
    (RoutineKind::Isbn10, "[0-9]{9}"),
    (RoutineKind::Isbn, "[0-9]{9}|97[89][0-9]{9}"),
    (RoutineKind::Issn, "[0-9]{7}"),
    (RoutineKind::Cusip, "[0-9A-Z]{8}"),
    (RoutineKind::Sedol, "[0-9B-DF-HJ-NP-TV-Z]{6}"),
    (RoutineKind::Cas, "[1-9][0-9]{3,8}"),
    (RoutineKind::EcNumber, "[0-9]{6}"),
    (RoutineKind::EcIndexNumber, "[0-9]{8}"),
    (RoutineKind::TidDe, "[1-9][0-9]{9}"),
    (RoutineKind::Modulus11X, "[0-9]{1,12}"),
    (RoutineKind::Modulus11Ten, "[0-9]{1,12}"),
    (RoutineKind::Modulus97, "[0-9]{4,20}"),
];

/// A routine key paired with a body drawn from its shape.
fn shaped_body<K: Clone + std::fmt::Debug + 'static>(
    table: &'static [(K, &'static str)],
) -> impl Strategy<Value = (K, String)> {
    prop::sample::select(table).prop_flat_map(|(key, pattern)| {
        (Just(key), proptest::string::string_regex(pattern).unwrap())
    })
}

/// Replace the character at `index` with every other decimal digit.
fn substitutions(code: &str, index: usize) -> Vec<String> {
    let original = code.as_bytes()[index];
    (b'0'..=b'9')
        .filter(|&d| d != original)
        .map(|d| {
            let mut bytes = code.as_bytes().to_vec();
            bytes[index] = d;
            String::from_utf8(bytes).unwrap()
        })
        .collect()
}

proptest! {
    /// `is_valid(body + calculate(body))` for any body the routine accepts.
    #[test]
    fn luhn_round_trip(body in "[0-9]{1,18}") {
        if let Ok(check) = LUHN.calculate(&body) {
            let code = format!("{}{}", body, check);
            prop_assert!(LUHN.is_valid(&code));
        }
    }

    #[test]
    fn verhoeff_round_trip(body in "[0-9]{1,18}") {
        let check = VERHOEFF.calculate(&body).unwrap();
        let code = format!("{}{}", body, check);
        prop_assert!(VERHOEFF.is_valid(&code));
    }

    #[test]
    fn isin_round_trip(body in "[A-Z]{2}[0-9A-Z]{9}") {
        let check = ISIN.calculate(&body).unwrap();
        let code = format!("{}{}", body, check);
        prop_assert!(ISIN.is_valid(&code));
    }

    #[test]
    fn iban_round_trip(country in "[A-Z]{2}", bban in "[0-9A-Z]{10,30}") {
        let check = IBAN.calculate(&format!("{country}00{bban}")).unwrap();
        let code = format!("{}{}{}", country, check, bban);
        prop_assert!(IBAN.is_valid(&code));
    }

    #[test]
    fn vat_round_trip((country, body) in shaped_body(VAT_BODIES)) {
        if let Ok(check) = country.routine().calculate(&body) {
            let code = format!("{body}{check}");
            prop_assert!(country.routine().is_valid(&code), "{country} {code}");
            prop_assert!(VAT_IN.is_valid(&format!("{country}{code}")), "{country} {code}");
        }
    }

    #[test]
    fn algorithm_round_trip((kind, body) in shaped_body(ALGORITHM_BODIES)) {
        if let Ok(check) = kind.routine().calculate(&body) {
            let code = format!("{body}{check}");
            prop_assert!(kind.routine().is_valid(&code), "{kind} {code}");
        }
    }

    /// Every single-digit substitution is detected.
    #[test]
    fn luhn_detects_substitution(body in "[0-9]{1,18}", pick in any::<prop::sample::Index>()) {
        if let Ok(check) = LUHN.calculate(&body) {
            let code = format!("{body}{check}");
            let index = pick.index(code.len());
            for mutated in substitutions(&code, index) {
                prop_assert!(!LUHN.is_valid(&mutated), "{code} -> {mutated}");
            }
        }
    }

    #[test]
    fn verhoeff_detects_substitution(body in "[0-9]{1,18}", pick in any::<prop::sample::Index>()) {
        let code = format!("{body}{}", VERHOEFF.calculate(&body).unwrap());
        let index = pick.index(code.len());
        for mutated in substitutions(&code, index) {
            prop_assert!(!VERHOEFF.is_valid(&mutated), "{code} -> {mutated}");
        }
    }

    #[test]
    fn aba_detects_substitution(body in "[0-9]{8}", pick in 0usize..9) {
        if let Ok(check) = ABA.calculate(&body) {
            let code = format!("{body}{check}");
            for mutated in substitutions(&code, pick) {
                prop_assert!(!ABA.is_valid(&mutated), "{code} -> {mutated}");
            }
        }
    }

    /// The dispatcher agrees with the country routine it selects.
    #[test]
    fn dispatch_is_transparent(index in 0usize..Country::ALL.len(), number in "[0-9A-Z]{0,14}") {
        let country = Country::ALL[index];
        let code = format!("{}{number}", country.code());
        prop_assert_eq!(VAT_IN.is_valid(&code), country.routine().is_valid(&number));
        prop_assert_eq!(VAT_IN.calculate(&code), country.routine().calculate(&number));
    }

    /// No routine panics on arbitrary text.
    #[test]
    fn never_panics(code in "\\PC{0,24}") {
        for kind in RoutineKind::ALL {
            let routine = kind.routine();
            let _ = routine.calculate(&code);
            let _ = routine.is_valid(&code);
        }
        for country in Country::ALL {
            let _ = country.routine().calculate(&code);
            let _ = country.routine().is_valid(&code);
        }
    }
}
