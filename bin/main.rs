//! Hola CLI Entry Point
//!
//! Asks for a name, an age and a favorite language on stdin, then greets.

use std::process;

fn main() {
    if let Err(e) = hola_interface::run_cli() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
