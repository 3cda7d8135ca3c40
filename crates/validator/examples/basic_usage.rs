//! Checks a registration record and masks a few raw values.

use castra_validator::form::{FormRecord, FormValidator};
use castra_validator::mask::Mask;
use castra_validator::prelude::*;

fn main() {
    for value in ["529.982.247-25", "529.982.247-24", "111.111.111-11"] {
        match Cpf.validate(value) {
            Ok(()) => println!("✓ {value}"),
            Err(e) => println!("✗ {value}: {e}"),
        }
    }

    println!();
    for mask in Mask::ALL {
        println!("{mask:>6}: {}", mask.apply("52998224725000"));
    }

    let record = FormRecord::new()
        .with("animal", "Mel")
        .with("tutor", "Ana Souza")
        .with("cpf", "52998224725")
        .with("email", "ana@")
        .with("microchip", "98200012345");

    let report = FormValidator::default().validate(&record);
    println!("\nvalid: {}", report.valid);
    for error in &report.errors {
        println!("  error: {error}");
    }
    for warning in &report.warnings {
        println!("  warning: {warning}");
    }
}
