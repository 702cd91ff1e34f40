//! # CPE Manager CLI
//!
//! This is the binary entry point for the `cpe-manager` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the requested single-CPE or dictionary operation.
//! - Handling top-level application errors and translating them into user-friendly
//!   output and a non-zero exit status.
//!
//! The core application logic is defined in the `lib.rs` library crate, ensuring
//! that the binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
