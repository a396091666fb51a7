//! The VAT identification number dispatcher: the first two characters name
//! the country, the rest goes to that country's routine.

use super::country::Country;
use crate::core::{CheckDigit, CheckDigitError, require_code};

const PREFIX_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatIn;

pub static VAT_IN: VatIn = VatIn;

impl VatIn {
    /// Split off a registered country prefix.
    fn split(code: &str) -> Result<(Country, &str), CheckDigitError> {
        let (prefix, number) = code
            .split_at_checked(PREFIX_LEN)
            .ok_or_else(|| CheckDigitError::InvalidCountryCode(code.to_string()))?;
        let country = prefix.parse()?;
        Ok((country, number))
    }

    /// The routine for the country prefix of `code`, if one is registered.
    pub fn routine_for(code: &str) -> Option<&'static dyn CheckDigit> {
        Self::split(code).ok().map(|(country, _)| country.routine())
    }
}

impl CheckDigit for VatIn {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_code(code)?;
        let (country, number) = Self::split(code)?;
        tracing::trace!(%country, number, "dispatching");
        country.routine().calculate(number)
    }

    fn is_valid(&self, code: &str) -> bool {
        match Self::split(code) {
            Ok((country, number)) => country.routine().is_valid(number),
            Err(_) => false,
        }
    }
}
