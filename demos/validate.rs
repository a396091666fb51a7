use pruefziffer::vat::{Country, VAT_IN, VatIn};
use pruefziffer::{CheckDigit, RoutineKind};

fn main() {
    // VAT numbers carry their country prefix
    println!("=== VAT Number Validation ===\n");

    let vat_ids = [
        "ATU13585627",
        "DE136695976",
        "NL004495445B01",
        "XI110305878",
        "ATU13585626",  // wrong check digit
        "MC370000059",  // no routine for Monaco
    ];

    for id in &vat_ids {
        match VatIn::routine_for(id) {
            Some(_) if VAT_IN.is_valid(id) => println!("  {id} => valid"),
            Some(_) => println!("  {id} => INVALID: check digit mismatch"),
            None => println!("  {id} => INVALID: unknown country prefix"),
        }
    }

    // Check digits for a number body
    println!("\n=== Check Digit Calculation ===\n");

    for body in ["ATU1358562", "DE13669597", "ZZ1234"] {
        match VAT_IN.calculate(body) {
            Ok(check) => println!("  {body} => {body}{check}"),
            Err(e) => println!("  {body} => error: {e}"),
        }
    }

    println!("\n  {} countries: {}", Country::ALL.len(), Country::ALL.map(|c| c.code()).join(" "));

    // Routines chosen by name, e.g. from a config file
    println!("\n=== Routines by Name ===\n");

    let checks = [
        ("luhn", "79927398713"),
        ("iban", "GB82 WEST 1234 5698 7654 32"),
        ("isbn", "9780306406157"),
        ("cas", "7732-18-5"),
        ("vat-in", "IT00950501007"),
        ("md5", "d41d8cd9"), // not a routine
    ];

    for (name, code) in &checks {
        match name.parse::<RoutineKind>() {
            Ok(kind) => println!("  {kind}: {code} => valid={}", kind.routine().is_valid(code)),
            Err(e) => println!("  {name}: {e}"),
        }
    }
}
