//! Property tests for extension matching.

use std::path::Path;

use proptest::prelude::*;

use assetgz::ExtensionSet;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only the final extension decides eligibility.
    #[test]
    fn property_final_extension_decides(
        dirs in proptest::collection::vec(segment(), 0..=4),
        stem in segment(),
        inner in proptest::option::of(segment()),
        ext in prop_oneof![Just("js"), Just("png"), Just("gz"), Just("html")],
    ) {
        let mut name = stem;
        if let Some(inner) = inner {
            name = format!("{name}.{inner}");
        }
        let path = dirs.iter().fold(Path::new("data").to_path_buf(), |p, d| p.join(d))
            .join(format!("{name}.{ext}"));

        let expected = matches!(ext, "js" | "html");
        prop_assert_eq!(ExtensionSet::default().matches(&path), expected);
    }

    /// PROPERTY: the artifact extension can never be configured.
    #[test]
    fn property_gz_is_never_accepted(
        others in proptest::collection::vec(segment(), 0..=5),
        dot in any::<bool>(),
    ) {
        let gz = if dot { ".gz" } else { "gz" };
        let mut list = others;
        list.push(gz.to_string());
        prop_assert!(ExtensionSet::parse(&list).is_err());
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(list in proptest::collection::vec("(?s).{0,16}", 0..=6)) {
        let _ = ExtensionSet::parse(&list);
    }
}
