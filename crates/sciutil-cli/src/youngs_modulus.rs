//! Young's modulus CLI
//!
//! Usage: youngs_modulus <stress> <strain>
//! Example: youngs_modulus 200e6 0.001

use sciutil::{ModulusError, youngs_modulus};
use std::env;

fn parse_value(name: &str, raw: &str) -> f64 {
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: Invalid {} value '{}'", name, raw);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <stress> <strain>", args[0]);
        std::process::exit(1);
    }

    let stress = parse_value("stress", &args[1]);
    let strain = parse_value("strain", &args[2]);

    match youngs_modulus(stress, strain) {
        Ok(modulus) => println!("Young's modulus: {}", modulus),
        Err(e @ ModulusError::ZeroStrain) => {
            eprintln!("Error: {}", e);
            eprintln!("Strain was {}; supply a non-zero strain.", strain);
            std::process::exit(1);
        }
    }
}
