//! # Dictionary Operations
//!
//! This module implements the default `cpe-manager` operation when no
//! `--cpe` is given: load a CPE dictionary, report how many entries it has,
//! and with `--validate` check every entry.
//!
//! ## Functionality
//!
//! - **Loading**: `--xml` names a file or URL; otherwise
//!   `./cpe-dictionary.xml` is tried before the published default.
//! - **Bulk validation**: every failing entry is printed with its title,
//!   followed by a tally. Failures are reported, not raised, so the exit
//!   status stays 0.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use log::info;

use cpe_manager::cpe::CpeVersion;
use cpe_manager::dictionary;
use cpe_manager::output::OutputConfig;
use cpe_manager::report;
use cpe_manager::validate::VendorPolicy;

/// Load and validate a CPE dictionary
#[derive(Args, Debug)]
pub struct DictionaryArgs {
    /// Use this cpe-dictionary.xml file or URL.
    ///
    /// Defaults to ./cpe-dictionary.xml, then to
    /// https://www.redhat.com/security/data/metrics/cpe-dictionary.xml.
    #[arg(short = 'x', long, value_name = "PATH_OR_URL", env = "CPE_MANAGER_XML")]
    pub xml: Option<String>,

    /// Validate CPEs found in cpe-dictionary.xml
    #[arg(short, long)]
    pub validate: bool,
}

/// Execute the dictionary operation.
pub fn execute(
    args: &DictionaryArgs,
    version: CpeVersion,
    policy: &VendorPolicy,
    out: &OutputConfig,
) -> Result<()> {
    let dictionary = dictionary::load(args.xml.as_deref())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(
        handle,
        "Loaded {} CPEs from {}",
        dictionary.len(),
        dictionary.origin()
    )?;

    if args.validate {
        info!(
            "Validating {} CPEs as CPE {}",
            dictionary.len(),
            version
        );
        let summary = report::validate_dictionary(&dictionary, version, policy);
        report::write_summary(&mut handle, &summary, out)?;
    }

    Ok(())
}
