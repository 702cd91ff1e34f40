//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cpe_manager::cpe::CpeVersion;
use cpe_manager::error::Error;
use cpe_manager::output::OutputConfig;
use cpe_manager::validate::VendorPolicy;

use crate::commands;

/// CPE Manager - Validate and describe CPE 2.2/2.3 names and CPE dictionaries
#[derive(Parser, Debug)]
#[command(name = "cpe-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    dictionary: commands::dictionary::DictionaryArgs,

    #[command(flatten)]
    cpe: commands::cpe::CpeArgs,

    /// Either 2.2 or 2.3; which CPE version to validate against
    #[arg(
        short,
        long,
        value_name = "MODE",
        default_value = "2.2",
        env = "CPE_MANAGER_MODE"
    )]
    mode: String,

    /// Disable Red Hat-specific checks (accept CPEs from any vendor)
    #[arg(long)]
    disable_redhat: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the requested operation
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_env_and_flag(&self.color);

        self.cpe.check_requirements()?;
        let version: CpeVersion = self.mode.parse()?;
        let policy = VendorPolicy::from_disable_flag(self.disable_redhat);

        if let Some(cpe) = &self.cpe.cpe {
            return commands::cpe::execute(cpe, &self.cpe, version, &policy, &out);
        }

        commands::dictionary::execute(&self.dictionary, version, &policy, &out)
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Builds the usage error for a flag that needs `--cpe`.
pub(crate) fn requires_cpe(what: &str) -> Error {
    Error::Usage {
        message: format!("Must provide a CPE to {}!", what),
    }
}
