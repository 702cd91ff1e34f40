//! Shared test utilities for CLI end-to-end tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_dictionary(dictionaries::MIXED);
//!     fixture.command().arg("--validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::cpes;
    #[allow(unused_imports)]
    pub use super::dictionaries;
    pub use super::TestFixture;
}

/// CPE strings used across tests.
#[allow(dead_code)]
pub mod cpes {
    /// A Red Hat CPE 2.2 URI.
    pub const RHEL_7_SERVER: &str = "cpe:/o:redhat:enterprise_linux:7::server";

    /// A Red Hat CPE 2.3 formatted string.
    pub const OPENSHIFT_FS: &str = "cpe:2.3:a:redhat:openshift:4.12:*:*:*:*:*:*:*";

    /// A valid CPE from a vendor other than Red Hat.
    pub const APACHE_HTTPD: &str = "cpe:/a:apache:http_server:2.4.57";

    /// Not a CPE at all.
    pub const NOT_A_CPE: &str = "not-a-cpe";
}

/// CPE dictionary documents for testing.
#[allow(dead_code)]
pub mod dictionaries {
    /// Three valid Red Hat entries.
    pub const ALL_VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cpe-list xmlns="http://cpe.mitre.org/dictionary/2.0">
  <cpe-item name="cpe:/o:redhat:enterprise_linux:7::server">
    <title>Red Hat Enterprise Linux 7 Server</title>
  </cpe-item>
  <cpe-item name="cpe:/o:redhat:enterprise_linux:8::baseos">
    <title>Red Hat Enterprise Linux BaseOS (v. 8)</title>
  </cpe-item>
  <cpe-item name="cpe:/a:redhat:openshift:4.12::el8">
    <title>Red Hat OpenShift Container Platform 4.12</title>
  </cpe-item>
</cpe-list>
"#;

    /// Five entries: two valid Red Hat names, one foreign vendor, two malformed.
    pub const MIXED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cpe-list xmlns="http://cpe.mitre.org/dictionary/2.0">
  <cpe-item name="cpe:/o:redhat:enterprise_linux:7::server">
    <title>Red Hat Enterprise Linux 7 Server</title>
  </cpe-item>
  <cpe-item name="cpe:/a:redhat:openshift:4.12::el8">
    <title>Red Hat OpenShift Container Platform 4.12</title>
  </cpe-item>
  <cpe-item name="cpe:/a:apache:http_server:2.4.57">
    <title>Apache HTTP Server</title>
  </cpe-item>
  <cpe-item name="cpe:/a:redhat:rhel sat:6">
    <title>Broken Satellite</title>
  </cpe-item>
  <cpe-item name="redhat:ceph_storage:5">
    <title>Missing Prefix</title>
  </cpe-item>
</cpe-list>
"#;

    /// Not well-formed XML.
    pub const BROKEN: &str = "<cpe-list><cpe-item name=\"cpe:/o:redhat:foo\">";
}

/// A test fixture that provides a temporary working directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `./cpe-dictionary.xml` with the given content.
    pub fn with_dictionary(self, content: &str) -> Self {
        self.with_file("cpe-dictionary.xml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path of a file in the temporary directory.
    #[allow(dead_code)]
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// A `cpe-manager` command running in the fixture directory, with
    /// colors off and no inherited configuration from the environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpe-manager");
        cmd.current_dir(self.path())
            .env_remove("CPE_MANAGER_XML")
            .env_remove("CPE_MANAGER_MODE")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
