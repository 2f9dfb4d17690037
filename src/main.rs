//! ticons - build-time generator for the letter-T extension icons
//!
//! Writes `icons/icon16.png`, `icons/icon48.png` and `icons/icon128.png`,
//! each a white "T" drawn from two rectangles on a steel-blue background.

mod cli;
mod logging;

use clap::Parser;
use cli::{exit_codes, Cli};
use ticons::{GenerateError, IconGenerator, ICON_SIZES, OUTPUT_DIR};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match IconGenerator::new(OUTPUT_DIR).run(&ICON_SIZES) {
        Ok(_) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            categorize_error(&e)
        }
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &GenerateError) -> i32 {
    if e.is_missing_capability() {
        exit_codes::CAPABILITY_MISSING
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}
