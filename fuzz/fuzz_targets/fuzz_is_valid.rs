#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::RoutineKind;
use pruefziffer::vat::Country;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for kind in RoutineKind::ALL {
            let _ = kind.routine().is_valid(s);
        }
        for country in Country::ALL {
            let _ = country.routine().is_valid(s);
        }
    }
});
