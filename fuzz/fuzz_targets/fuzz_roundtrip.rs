#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8codec::{Scalars, decode_at, encode_scalar, is_well_formed, scalar_count};

#[derive(Debug, Arbitrary)]
struct Input {
    scalars: Vec<u32>,
}

// Any concatenation of encodings — including surrogates and out-of-range
// values, which encoding is total over — must round-trip scalar for scalar.
fuzz_target!(|input: Input| {
    let mut buf = Vec::new();
    let mut expected = Vec::with_capacity(input.scalars.len());
    for &raw in &input.scalars {
        // Keep within the four-byte bit budget; encoding truncates payload
        // bits above it anyway, which would break exact round-trips.
        let scalar = raw & 0x1F_FFFF;
        buf.extend_from_slice(encode_scalar(scalar).as_bytes());
        expected.push(scalar);
    }

    assert!(is_well_formed(&buf));
    assert_eq!(scalar_count(&buf), expected.len());
    assert!(Scalars::new(&buf).eq(expected.iter().copied()));

    let mut pos = 0;
    for &scalar in &expected {
        let (decoded, len) = decode_at(&buf, pos).unwrap();
        assert_eq!(decoded, scalar);
        pos += len;
    }
    assert_eq!(pos, buf.len());
});
