//! # Single-CPE Operations
//!
//! This module implements everything `cpe-manager` does with a CPE given on
//! the command line via `--cpe`:
//!
//! - **Describe** (`--describe`): an explanation of each CPE attribute
//!   followed by the attribute values of the given name.
//! - **Serializations** (`--wfn`, `--uri`, `--fs`): the name rendered as a
//!   WFN, a URI and a CPE 2.3 formatted string.
//! - **Check** (no other flag): reports whether the name is valid.
//!
//! A name that fails validation under `--describe` is an error and the
//! process exits 1. Otherwise the failure is reported on stdout as
//! `Validation failed for <cpe>: <message>` and the process exits 0.
//! The dictionary is never loaded on this path.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use cpe_manager::cpe::CpeVersion;
use cpe_manager::error::Error;
use cpe_manager::output::{failure, success, OutputConfig};
use cpe_manager::report::{self, Serializations};
use cpe_manager::validate::{check, VendorPolicy};

use crate::cli::requires_cpe;

/// Operate on a single CPE string
#[derive(Args, Debug)]
pub struct CpeArgs {
    /// Operate on this provided CPE string
    #[arg(short, long, value_name = "CPE")]
    pub cpe: Option<String>,

    /// Describe the provided CPE string
    #[arg(short, long)]
    pub describe: bool,

    /// Returns the CPE name as a WFN string
    #[arg(short, long)]
    pub wfn: bool,

    /// Returns the CPE name as a URI string
    #[arg(short, long)]
    pub uri: bool,

    /// Returns the CPE name as a formatted (2.3) string
    #[arg(short, long)]
    pub fs: bool,
}

impl CpeArgs {
    /// Rejects flags that need `--cpe` when it is missing.
    pub fn check_requirements(&self) -> cpe_manager::error::Result<()> {
        if self.cpe.is_some() {
            return Ok(());
        }
        let missing = [
            (self.describe, "describe"),
            (self.wfn, "display WFN of"),
            (self.uri, "display URI of"),
            (self.fs, "display FS of"),
        ];
        match missing.into_iter().find(|(set, _)| *set) {
            Some((_, what)) => Err(requires_cpe(what)),
            None => Ok(()),
        }
    }

    pub fn serializations(&self) -> Serializations {
        Serializations {
            wfn: self.wfn,
            uri: self.uri,
            fs: self.fs,
        }
    }
}

/// Execute the single-CPE operations requested in `args` for `cpe`.
pub fn execute(
    cpe: &str,
    args: &CpeArgs,
    version: CpeVersion,
    policy: &VendorPolicy,
    out: &OutputConfig,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&mut handle, cpe, args, version, policy, out)
}

fn run(
    handle: &mut dyn Write,
    cpe: &str,
    args: &CpeArgs,
    version: CpeVersion,
    policy: &VendorPolicy,
    out: &OutputConfig,
) -> Result<()> {
    let record = match check(cpe, version, policy) {
        Ok(record) => record,
        Err(e) if args.describe => return Err(Error::from(e).into()),
        Err(e) => {
            let line = format!("Validation failed for {}: {}", cpe, e);
            writeln!(handle, "{}", failure(out, &line))?;
            return Ok(());
        }
    };

    if args.describe {
        report::describe(handle, cpe, &record, version)?;
    }

    let wanted = args.serializations();
    if wanted.any() {
        report::serializations(handle, &record, wanted)?;
    }

    if !args.describe && !wanted.any() {
        writeln!(handle, "{}", success(out, &format!("Valid CPE: {}", cpe)))?;
    }

    Ok(())
}
