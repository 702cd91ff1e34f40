//! # CLI Command Implementations
//!
//! This module contains the two operations of the `cpe-manager` command-line
//! tool. Each lives in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct with the operation's flags, derived using `clap` and
//!   flattened into the top-level CLI.
//! - An `execute` function that takes the parsed arguments and performs the
//!   operation, calling into the `cpe_manager` library for the core logic.

pub mod cpe;
pub mod dictionary;
