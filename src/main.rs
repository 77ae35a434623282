//! appicon entrypoint.
//!
//! Generates the icon set from the default source into the default output
//! directory and exits non-zero on failure. For programmatic use, prefer the
//! library API (`appicon::api`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    if cli::run(&appicon::GeneratorParams::default()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
