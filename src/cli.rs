//! Command-line interface
//!
//! The generator takes no inputs; the flags only control log output.

use clap::Parser;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const CAPABILITY_MISSING: i32 = 2;
}

/// Generate the letter-T icons (16, 48, 128 px) into ./icons
#[derive(Debug, Parser)]
#[command(name = "ticons", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long = "json-output")]
    pub json_output: bool,
}
