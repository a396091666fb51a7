#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::RoutineKind;
use pruefziffer::vat::Country;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        for kind in RoutineKind::ALL {
            let _ = kind.routine().calculate(s);
        }
        for country in Country::ALL {
            let _ = country.routine().calculate(s);
        }
    }
});
