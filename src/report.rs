//! # Reporting
//!
//! Human-oriented text for the two things `cpe-manager` does: describing a
//! single CPE, and summarising a validation pass over a whole dictionary.
//!
//! Writers take any [`std::io::Write`] so the same code prints to stdout and
//! renders into buffers in tests.

use std::io::{self, Write};

use crate::cpe::{Component, CpeVersion};
use crate::dictionary::Dictionary;
use crate::output::{failure, success, OutputConfig};
use crate::validate::{check, CpeRecord, VendorPolicy};

const NAMING_REFERENCE: &str =
    "http://csrc.nist.gov/publications/nistir/ir7695/NISTIR-7695-CPE-Naming.pdf";

const HEADER_COMMON: &str = "
    Part can be one of: a (Application), h (Hardware), or o (Operating System)
    Vendor is the supplier name and should be an abridged version of the primary DNS hostname (e.g. 'redhat.com' becomes
      'redhat' or 'oxford.ac.uk' becomes 'oxford')
    Product is a short and recognizable name of the product, where no such short recognition exists it should be the full
      name of the product with spaces underscored (e.g. 'red_hat_enterprise_linux' would be used if 'rhel' were not
      recognized as the same)
    Version is the version of the project and should be represented in the same way as the product (e.g. 'Foo 1-1' would
      use '1-1' or 'Bar 1.1-p3' would be '1.1-p3'.  There is no way in CPE to note major and minor versions so you can
      opt to use this field for the major (e.g. '1') and the Update field for the minor
    Update is used for update or service pack information, and may be referred to as a point or minor version.  In the
      case of a version \"0\" you can use the vendor term for initial release (e.g. you could use '0' to refer to RHEL 7.0
      or 'ga' in the case of RHEL 7 GA).  If there is no commonly used term for the initial release, then '-' should be
      used for that CPE (e.g. \"Foo 1\" would be \"foo:1:-:\" unless it was referred to as \"Foo 1.0\" in which case \"foo:1:0:\"
      may be more appropriate)
    Edition is used for the edition of this platform, e.g. \"workstation\" or \"server\" or \"professional\", etc.";

const HEADER_2_3: &str = "      NOTE: This is available for legacy CPE 2.2 compatibility but is considered deprecated in 2.3
    Language is used for the language used for this product (e.g. \"zh-tw\" for traditional Chinese)
    Software Edition is used to characterise how the product is tailored for a particular market or class of end users
    Target Software is used to indicate the software environment within which the product operates
    Target Hardware is used to indicate the architecture on which the product operates (e.g. \"x86\" or \"x86_64\")
    Other is used to capture any other general descriptive or identifying information which is vendor- or
      product-specific
";

/// Which alternate renderings to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Serializations {
    pub wfn: bool,
    pub uri: bool,
    pub fs: bool,
}

impl Serializations {
    pub fn any(&self) -> bool {
        self.wfn || self.uri || self.fs
    }
}

/// Human name for a part value.
pub fn part_name(part: &Component) -> &'static str {
    match part {
        Component::Value(p) if p == "a" => "Application",
        Component::Value(p) if p == "h" => "Hardware",
        Component::Value(p) if p == "o" => "Operating System",
        _ => "Any",
    }
}

fn field(out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{:>18}: {}", label, value)
}

/// Prints the educational header and every field of `record`.
///
/// Under 2.2 only part through edition are listed; under 2.3 all eleven.
pub fn describe(
    out: &mut dyn Write,
    input: &str,
    record: &CpeRecord,
    version: CpeVersion,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "    Refer to {} for the full specification,",
        NAMING_REFERENCE
    )?;
    writeln!(out, "    but in a nutshell:")?;
    writeln!(out, "{}", HEADER_COMMON)?;
    if version == CpeVersion::V2_3 {
        writeln!(out, "{}", HEADER_2_3)?;
    }

    writeln!(out, "Given the CPE string \"{}\":\n", input)?;
    field(
        out,
        "Part",
        &format!("{} [{}]", record.part, part_name(record.cpe.part())),
    )?;
    field(out, "Vendor", &record.vendor)?;
    field(out, "Product", &record.product)?;
    field(out, "Version", &record.version)?;
    field(out, "Update", &record.update)?;
    field(out, "Edition", &record.edition)?;
    if version == CpeVersion::V2_3 {
        field(out, "Language", &record.language)?;
        field(out, "Software Edition", &record.sw_edition)?;
        field(out, "Target Software", &record.target_sw)?;
        field(out, "Target Hardware", &record.target_hw)?;
        field(out, "Other", &record.other)?;
    }
    Ok(())
}

/// Prints the requested renderings. The WFN comes from the name as
/// validated; the URI and formatted string come from its 2.3 equivalent.
pub fn serializations(
    out: &mut dyn Write,
    record: &CpeRecord,
    wanted: Serializations,
) -> io::Result<()> {
    if wanted.wfn {
        field(out, "WFN", &record.cpe.as_wfn())?;
    }
    if wanted.uri {
        field(out, "URI (2.2)", &record.cpe23.as_uri_2_3())?;
    }
    if wanted.fs {
        field(out, "Formatted (2.3)", &record.cpe23.as_fs())?;
    }
    Ok(())
}

/// One dictionary entry that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub cpe: String,
    pub title: String,
    pub message: String,
}

/// Outcome of validating every dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub failures: Vec<Failure>,
}

impl ValidationSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }
}

/// Validates every entry of `dictionary`. A failing entry never stops the scan.
pub fn validate_dictionary(
    dictionary: &Dictionary,
    version: CpeVersion,
    policy: &VendorPolicy,
) -> ValidationSummary {
    let failures = dictionary
        .iter()
        .filter_map(|(cpe, title)| {
            check(cpe, version, policy).err().map(|e| Failure {
                cpe: cpe.to_string(),
                title: title.to_string(),
                message: e.to_string(),
            })
        })
        .collect();

    ValidationSummary {
        total: dictionary.len(),
        failures,
    }
}

/// Prints one line per failure followed by the tally.
pub fn write_summary(
    out: &mut dyn Write,
    summary: &ValidationSummary,
    config: &OutputConfig,
) -> io::Result<()> {
    for f in &summary.failures {
        writeln!(out, "Validation failed for {}: {}", f.title, f.message)?;
    }

    if summary.failed() > 0 {
        let tally = format!(
            "{} out of {} CPEs failed to validate",
            summary.failed(),
            summary.total
        );
        writeln!(out, "{}", failure(config, &tally))?;
    } else {
        let tally = format!("All {} CPEs validated successfully", summary.total);
        writeln!(out, "{}", success(config, &tally))?;
    }
    Ok(())
}
