//! # CPE Validation
//!
//! Turns an identifier string into a [`CpeRecord`]: the name is parsed under
//! the requested [`CpeVersion`], checked against the [`VendorPolicy`], and
//! flattened into normalized fields.
//!
//! Failures are returned as [`ValidationError`] values whose display string
//! is the message shown to users. Nothing here prints or exits; the
//! single-CPE path and the bulk dictionary scan decide what to do with an
//! error.

use log::debug;
use thiserror::Error;

use crate::cpe::{Attribute, Cpe, CpeError, CpeVersion};
use crate::defaults::{EXPECTED_VENDOR, EXPECTED_VENDOR_LABEL};

/// Vendor restriction applied after a name parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorPolicy {
    /// Any vendor is accepted.
    Unrestricted,
    /// The vendor must equal `vendor`; `label` names it in messages.
    Require { vendor: String, label: String },
}

impl VendorPolicy {
    /// The default policy: only Red Hat CPEs are valid.
    pub fn red_hat() -> Self {
        VendorPolicy::Require {
            vendor: EXPECTED_VENDOR.to_string(),
            label: EXPECTED_VENDOR_LABEL.to_string(),
        }
    }

    /// `Unrestricted` when `disabled`, otherwise [`VendorPolicy::red_hat`].
    pub fn from_disable_flag(disabled: bool) -> Self {
        if disabled {
            VendorPolicy::Unrestricted
        } else {
            Self::red_hat()
        }
    }
}

impl Default for VendorPolicy {
    fn default() -> Self {
        Self::red_hat()
    }
}

/// Why an identifier was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The grammar rejected the string.
    #[error(transparent)]
    Invalid(#[from] CpeError),

    /// The name parsed but belongs to another vendor.
    #[error("Validation failed (not a {label} CPE!): {input}")]
    WrongVendor { input: String, label: String },
}

/// A validated CPE flattened into display fields.
///
/// Each field is the attribute value with WFN quoting removed; logical
/// values appear as `ANY` and `NA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpeRecord {
    pub part: String,
    pub vendor: String,
    pub product: String,
    pub version: String,
    pub update: String,
    pub edition: String,
    pub language: String,
    pub sw_edition: String,
    pub target_sw: String,
    pub target_hw: String,
    pub other: String,
    /// The name as validated.
    pub cpe: Cpe,
    /// The CPE 2.3 equivalent, used for the URI and formatted string renderings.
    pub cpe23: Cpe,
}

impl CpeRecord {
    /// Builds a record from a validated name and its 2.3 equivalent.
    pub fn new(cpe: Cpe, cpe23: Cpe) -> Self {
        let field = |attr: Attribute| cpe.get(attr).unquoted();
        Self {
            part: field(Attribute::Part),
            vendor: field(Attribute::Vendor),
            product: field(Attribute::Product),
            version: field(Attribute::Version),
            update: field(Attribute::Update),
            edition: field(Attribute::Edition),
            language: field(Attribute::Language),
            sw_edition: field(Attribute::SwEdition),
            target_sw: field(Attribute::TargetSw),
            target_hw: field(Attribute::TargetHw),
            other: field(Attribute::Other),
            cpe,
            cpe23,
        }
    }

    /// Builds a record, deriving the 2.3 equivalent from `input` when `cpe`
    /// was validated as 2.2.
    pub fn from_cpe(input: &str, cpe: Cpe) -> Self {
        let cpe23 = match cpe.cpe_version() {
            CpeVersion::V2_3 => cpe.clone(),
            CpeVersion::V2_2 => Cpe::parse_2_3(input).unwrap_or_else(|e| {
                debug!("{}; reusing the 2.2 attributes for 2.3 output", e);
                cpe.to_2_3()
            }),
        };
        Self::new(cpe, cpe23)
    }
}

/// Parses `input` with the grammar of `version`.
pub fn validate(input: &str, version: CpeVersion) -> Result<Cpe, CpeError> {
    Cpe::parse(input, version)
}

/// Validates `input` and applies the vendor policy, returning the flattened record.
pub fn check(
    input: &str,
    version: CpeVersion,
    policy: &VendorPolicy,
) -> Result<CpeRecord, ValidationError> {
    let cpe = validate(input, version)?;

    if let VendorPolicy::Require { vendor, label } = policy {
        if !cpe.vendor().is_value(vendor) {
            return Err(ValidationError::WrongVendor {
                input: input.to_string(),
                label: label.clone(),
            });
        }
    }

    Ok(CpeRecord::from_cpe(input, cpe))
}
