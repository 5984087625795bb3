//! `fixload list` – print the built-in fixture table.

use fixload_core::builtin_fixtures;

pub fn run_list() {
    println!("{:<12} {:<7} {:<34} {}", "FILE", "ALGO", "DIGEST", "SOURCE");
    for f in builtin_fixtures() {
        println!(
            "{:<12} {:<7} {:<34} {}",
            f.destination, f.algorithm, f.expected_digest, f.source
        );
    }
}
