//! Property tests for size/savings arithmetic.

use proptest::prelude::*;

use assetgz::Savings;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: saved bytes are exactly original minus compressed.
    #[test]
    fn property_saved_is_difference(
        original in 0u64..(1 << 40),
        compressed in 0u64..(1 << 40),
    ) {
        let s = Savings::new(original, compressed);
        prop_assert_eq!(s.saved(), original as i64 - compressed as i64);
    }

    /// PROPERTY: percent is always finite, and never above 100.
    #[test]
    fn property_percent_is_finite(
        original in 0u64..(1 << 40),
        compressed in 0u64..(1 << 40),
    ) {
        let p = Savings::new(original, compressed).percent();
        prop_assert!(p.is_finite());
        prop_assert!(p <= 100.0);
    }

    /// PROPERTY: an empty original always reports 0 percent.
    #[test]
    fn property_empty_original_is_zero_percent(compressed in any::<u32>()) {
        prop_assert_eq!(Savings::new(0, compressed as u64).percent(), 0.0);
    }
}
