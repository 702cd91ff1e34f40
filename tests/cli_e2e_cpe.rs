//! End-to-end tests for single-CPE operations (`--cpe`).
//!
//! These tests invoke the actual CLI binary and check describe output,
//! alternate serializations and the vendor restriction from a user's
//! perspective.

mod common;
use common::prelude::*;

#[test]
fn test_describe_red_hat_cpe_2_2() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::RHEL_7_SERVER, "--describe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Given the CPE string \"{}\":",
            cpes::RHEL_7_SERVER
        )))
        .stdout(predicate::str::contains("              Part: o [Operating System]"))
        .stdout(predicate::str::contains("            Vendor: redhat"))
        .stdout(predicate::str::contains("           Product: enterprise_linux"))
        .stdout(predicate::str::contains("           Version: 7"))
        .stdout(predicate::str::contains("           Edition: server"))
        .stdout(predicate::str::contains("Language:").not());
}

#[test]
fn test_describe_red_hat_cpe_2_3() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-c", cpes::OPENSHIFT_FS, "-d", "-m", "2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NOTE: This is available for legacy CPE 2.2 compatibility",
        ))
        .stdout(predicate::str::contains("           Product: openshift"))
        .stdout(predicate::str::contains("           Version: 4.12"))
        .stdout(predicate::str::contains("   Target Hardware: ANY"));
}

#[test]
fn test_describe_invalid_cpe_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::NOT_A_CPE, "--describe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation failed: Invalid CPE: not-a-cpe!"))
        .stderr(predicate::str::contains("Caused by").not());
}

#[test]
fn test_describe_failure_printed_once() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--cpe", cpes::APACHE_HTTPD, "--describe"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("not a Red Hat CPE!").count(), 1);
    assert!(!stderr.contains("Caused by"));
}

#[test]
fn test_invalid_cpe_reported_in_both_modes() {
    let fixture = TestFixture::new();

    for mode in ["2.2", "2.3"] {
        fixture
            .command()
            .args(["--cpe", cpes::NOT_A_CPE, "--mode", mode])
            .assert()
            .success()
            .stdout(predicate::str::diff(
                "Validation failed for not-a-cpe: Invalid CPE: not-a-cpe!\n",
            ))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_serialization_failure_reported_on_stdout() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::NOT_A_CPE, "--wfn"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Validation failed for not-a-cpe: Invalid CPE: not-a-cpe!\n",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_foreign_vendor_rejected_by_default() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::APACHE_HTTPD, "--describe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a Red Hat CPE!"));
}

#[test]
fn test_foreign_vendor_accepted_with_disable_redhat() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::APACHE_HTTPD, "--describe", "--disable-redhat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("            Vendor: apache"))
        .stdout(predicate::str::contains("           Version: 2.4.57"));
}

#[test]
fn test_serializations() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::RHEL_7_SERVER, "--wfn", "--uri", "--fs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "               WFN: wfn:[part=\"o\",vendor=\"redhat\",product=\"enterprise_linux\",version=\"7\",update=ANY,edition=\"server\",language=ANY]",
        ))
        .stdout(predicate::str::contains(
            "         URI (2.2): cpe:/o:redhat:enterprise_linux:7::server",
        ))
        .stdout(predicate::str::contains(
            "   Formatted (2.3): cpe:2.3:o:redhat:enterprise_linux:7:*:server:*:*:*:*:*",
        ));
}

#[test]
fn test_serializations_from_formatted_string() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-c", cpes::OPENSHIFT_FS, "-m", "2.3", "-u"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "         URI (2.2): cpe:/a:redhat:openshift:4.12\n",
        ));
}

#[test]
fn test_cpe_without_operation_reports_valid() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--cpe", cpes::RHEL_7_SERVER])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Valid CPE: {}\n",
            cpes::RHEL_7_SERVER
        )));
}

#[test]
fn test_cpe_never_loads_dictionary() {
    // A broken local dictionary must not matter when --cpe is given
    let fixture = TestFixture::new().with_dictionary(dictionaries::BROKEN);

    fixture
        .command()
        .args(["--cpe", cpes::RHEL_7_SERVER, "--validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded").not());
}

#[test]
fn test_mode_from_environment() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("CPE_MANAGER_MODE", "2.3")
        .args(["--cpe", cpes::OPENSHIFT_FS])
        .assert()
        .success();
}
