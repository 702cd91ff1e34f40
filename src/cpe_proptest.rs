//! Property-based tests for CPE parsing and rendering.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::cpe::{Attribute, Cpe, CpeVersion};
    use crate::validate::{check, VendorPolicy};
    use proptest::prelude::*;

    /// A URI component: letters, digits and the punctuation the URI binding
    /// allows without percent-encoding.
    fn uri_component() -> impl Strategy<Value = String> {
        "[a-z0-9_][a-z0-9_.\\-]{0,15}"
    }

    // ============================================================================
    // Rejection properties
    // ============================================================================

    proptest! {
        /// Property: strings without a CPE or WFN prefix never parse
        #[test]
        fn unprefixed_strings_never_parse(input in "[^cwCW].*") {
            prop_assert!(Cpe::parse_2_2(&input).is_err());
            prop_assert!(Cpe::parse_2_3(&input).is_err());
        }

        /// Property: parsing never panics, whatever follows the prefix
        #[test]
        fn parsing_arbitrary_bodies_never_panics(body in ".*") {
            let _ = Cpe::parse_2_2(&format!("cpe:/{}", body));
            let _ = Cpe::parse_2_3(&format!("cpe:/{}", body));
            let _ = Cpe::parse_2_3(&format!("cpe:2.3:{}", body));
            let _ = Cpe::parse_2_3(&format!("wfn:[{}]", body));
        }

        /// Property: a vendor other than redhat always fails the default policy
        #[test]
        fn foreign_vendor_fails_vendor_policy(
            vendor in "[a-z]{1,12}".prop_filter("not redhat", |v| v != "redhat"),
            product in uri_component(),
        ) {
            let input = format!("cpe:/a:{}:{}", vendor, product);
            prop_assert!(check(&input, CpeVersion::V2_2, &VendorPolicy::red_hat()).is_err());
            prop_assert!(check(&input, CpeVersion::V2_2, &VendorPolicy::Unrestricted).is_ok());
        }
    }

    // ============================================================================
    // Rendering properties
    // ============================================================================

    proptest! {
        /// Property: describing a Red Hat URI yields the input's vendor, product and version
        #[test]
        fn red_hat_uri_fields_match_input(
            part in prop::sample::select(vec!["a", "o", "h"]),
            product in uri_component(),
            version in uri_component(),
        ) {
            let input = format!("cpe:/{}:redhat:{}:{}", part, product, version);
            let record = check(&input, CpeVersion::V2_2, &VendorPolicy::red_hat()).unwrap();
            prop_assert_eq!(record.vendor, "redhat");
            prop_assert_eq!(record.product, product);
            prop_assert_eq!(record.version, version);
        }

        /// Property: the URI rendering of a parsed URI is the input with
        /// trailing empty components removed
        #[test]
        fn uri_rendering_is_stable(
            vendor in uri_component(),
            product in uri_component(),
            version in uri_component(),
        ) {
            let input = format!("cpe:/a:{}:{}:{}", vendor, product, version);
            let cpe = Cpe::parse_2_3(&input).unwrap();
            prop_assert_eq!(cpe.as_uri_2_3(), input);
        }

        /// Property: the formatted string of any parsed name parses back to the same attributes
        #[test]
        fn formatted_string_reparses_to_same_attributes(
            vendor in uri_component(),
            product in uri_component(),
            update in prop::option::of(uri_component()),
        ) {
            let input = format!(
                "cpe:/a:{}:{}:1.0:{}",
                vendor,
                product,
                update.unwrap_or_default()
            );
            let cpe = Cpe::parse_2_3(&input).unwrap();
            let reparsed = Cpe::parse_2_3(&cpe.as_fs()).unwrap();
            for attr in Attribute::ALL {
                prop_assert_eq!(cpe.get(attr), reparsed.get(attr));
            }
        }
    }
}
