//! Property-based tests for the validator and the platform classifier.

use proptest::prelude::*;
use snapgrab::platform::Platform;
use snapgrab::validator::validate;

proptest! {
    /// Absolute URLs require a scheme; schemeless strings never validate.
    #[test]
    fn strings_without_a_scheme_never_validate(raw in "[a-zA-Z0-9 ./-]{0,40}") {
        prop_assert!(!validate(&raw));
    }

    #[test]
    fn well_formed_https_urls_validate(host in "[a-z]{1,12}", path in "[a-z0-9/]{0,20}") {
        let url = format!("https://{}.com/{}", host, path);
        prop_assert!(validate(&url));
    }

    /// Rule one wins for any URL containing "instagram.com", wherever the
    /// substring sits and whatever else the URL contains.
    #[test]
    fn instagram_substring_always_classifies_instagram(
        prefix in "[a-z0-9./-]{0,16}",
        suffix in "[a-zA-Z0-9./?=-]{0,16}",
    ) {
        let url = format!("https://{}instagram.com/{}", prefix, suffix);
        prop_assert_eq!(Platform::classify(&url), Platform::Instagram);
    }

    /// Hosts built from a restricted alphabet can't contain any of the
    /// known platform substrings, so they always classify as Unknown.
    #[test]
    fn unmatched_hosts_classify_unknown(host in "[a-eg-m]{1,12}", path in "[a-eg-m0-9/]{0,20}") {
        let url = format!("https://{}.org/{}", host, path);
        let platform = Platform::classify(&url);
        prop_assert_eq!(platform, Platform::Unknown);
        prop_assert!(!platform.is_supported());
    }

    /// Classification never changes with ASCII case.
    #[test]
    fn classification_ignores_ascii_case(url in "https://[a-z.]{1,20}/[a-z0-9]{0,10}") {
        let upper = url.to_ascii_uppercase();
        prop_assert_eq!(Platform::classify(&url), Platform::classify(&upper));
    }
}
