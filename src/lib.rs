//! # CPE Manager Library
//!
//! This library validates and describes Common Platform Enumeration (CPE)
//! names against the CPE 2.2 and 2.3 naming specifications, and checks
//! every entry of a published CPE dictionary. It backs the `cpe-manager`
//! command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use cpe_manager::cpe::CpeVersion;
//! use cpe_manager::validate::{check, VendorPolicy};
//!
//! let record = check(
//!     "cpe:/o:redhat:enterprise_linux:7::server",
//!     CpeVersion::V2_2,
//!     &VendorPolicy::red_hat(),
//! )
//! .unwrap();
//! assert_eq!(record.product, "enterprise_linux");
//! assert_eq!(record.cpe23.as_fs(), "cpe:2.3:o:redhat:enterprise_linux:7:*:server:*:*:*:*:*");
//!
//! assert!(check("not-a-cpe", CpeVersion::V2_3, &VendorPolicy::Unrestricted).is_err());
//! ```
//!
//! ## Modules
//!
//! - **Naming (`cpe`)**: typed CPE names with the URI, formatted string and
//!   WFN bindings.
//! - **Validation (`validate`)**: parses a name under a requested version,
//!   applies the vendor restriction and flattens it into a `CpeRecord`.
//! - **Dictionary (`dictionary`)**: loads a CPE dictionary from a file, a URL
//!   or the default locations.
//! - **Reporting (`report`)**: describes a single name and summarises a bulk
//!   validation pass.

pub mod cpe;
pub mod defaults;
pub mod dictionary;
pub mod error;
pub mod output;
pub mod report;
pub mod validate;

#[cfg(test)]
mod cpe_proptest;
