use rstest::rstest;

use crate::{CodePoint, decode_at, encode_scalar, is_single_scalar};

#[rstest]
#[case(0x00)]
#[case(0x7F)]
#[case(0x80)]
#[case(0x7FF)]
#[case(0x800)]
#[case(0xFFFF)]
#[case(0x1_0000)]
#[case(0x10_FFFF)]
fn encode_then_decode_round_trips(#[case] scalar: CodePoint) {
    let encoded = encode_scalar(scalar);
    assert_eq!(decode_at(encoded.as_bytes(), 0), Ok((scalar, encoded.len())));
    assert!(is_single_scalar(encoded.as_bytes()));
}

#[rstest]
#[case(0x00, 1)]
#[case(0x7F, 1)]
#[case(0x80, 2)]
#[case(0x7FF, 2)]
#[case(0x800, 3)]
#[case(0xFFFF, 3)]
#[case(0x1_0000, 4)]
#[case(0x10_FFFF, 4)]
fn minimal_length_thresholds(#[case] scalar: CodePoint, #[case] expected: usize) {
    assert_eq!(encode_scalar(scalar).len(), expected);
}

#[test]
fn relaxed_round_trip_covers_surrogates_and_beyond() {
    for scalar in [0xD800, 0xDFFF, 0x11_0000] {
        let encoded = encode_scalar(scalar);
        assert_eq!(decode_at(encoded.as_bytes(), 0), Ok((scalar, encoded.len())));
    }
}
