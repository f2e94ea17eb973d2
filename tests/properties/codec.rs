//! Property tests for the gzip codec.

use proptest::prelude::*;

use assetgz::domain::ports::Codec;
use assetgz::infrastructure::GzipCodec;
use assetgz::CompressionLevel;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every level decodes back to the input.
    #[test]
    fn property_encode_decode_round_trip(
        input in proptest::collection::vec(any::<u8>(), 0..4096),
        level in 0u32..=9,
    ) {
        let codec = GzipCodec::new(CompressionLevel::new(level).unwrap());
        let encoded = codec.encode(&input).unwrap();
        prop_assert_eq!(codec.decode(&encoded).unwrap(), input);
    }

    /// PROPERTY: output is deterministic for the same input and level.
    #[test]
    fn property_encode_is_deterministic(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let codec = GzipCodec::default();
        prop_assert_eq!(codec.encode(&input).unwrap(), codec.encode(&input).unwrap());
    }
}
