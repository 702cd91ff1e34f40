//! Default values for cpe-manager.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;
use std::time::Duration;

/// Dictionary file looked up in the working directory when no source is given.
pub const LOCAL_DICTIONARY: &str = "cpe-dictionary.xml";

/// Published dictionary fetched when no local copy is present.
///
/// Can be overridden with `--xml` or the `CPE_MANAGER_XML` environment variable.
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://www.redhat.com/security/data/metrics/cpe-dictionary.xml";

/// XML namespace of CPE dictionary 2.0 documents.
pub const DICTIONARY_NAMESPACE: &str = "http://cpe.mitre.org/dictionary/2.0";

/// Vendor required of every CPE unless `--disable-redhat` is given.
pub const EXPECTED_VENDOR: &str = "redhat";

/// Human-readable name of [`EXPECTED_VENDOR`] used in messages.
pub const EXPECTED_VENDOR_LABEL: &str = "Red Hat";

/// Timeout applied to the dictionary download.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Returns the path of the local default dictionary.
pub fn local_dictionary_path() -> PathBuf {
    PathBuf::from(".").join(LOCAL_DICTIONARY)
}
