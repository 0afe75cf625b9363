//! # shot-name CLI
//!
//! Command-line interface for the screenshot namer.
//!
//! ## Usage
//! ```bash
//! shot-name name screen1 --model "iPhone Simulator" --width 375 --height 667 --language en
//! shot-name classify --model iPad --width 1024 --height 768 --output json
//! shot-name table --scheme legacy
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
