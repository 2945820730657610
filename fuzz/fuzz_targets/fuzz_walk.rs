#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8codec::{ScalarCursor, Scalars, ValidateOptions, decode_at, is_well_formed, is_well_formed_with, scalar_count};

// The relaxed validator must accept a superset of what the standard library
// accepts, and on anything it accepts, the cursor walk must be internally
// consistent in both directions.
fuzz_target!(|data: &[u8]| {
    let std_accepts = std::str::from_utf8(data).is_ok();
    let relaxed_accepts = is_well_formed(data);
    let strict_accepts = is_well_formed_with(data, ValidateOptions::strict());

    if std_accepts {
        assert!(relaxed_accepts, "std accepted bytes the validator rejected");
        assert!(strict_accepts, "std accepted bytes strict validation rejected");
    }
    if strict_accepts {
        assert!(relaxed_accepts, "strict acceptance implies relaxed acceptance");
        assert!(std_accepts, "strict validation accepted bytes std rejected");
    }

    if !relaxed_accepts {
        return;
    }

    // Checked walk: positions and scalars, straight off the decoder.
    let mut positions = Vec::new();
    let mut scalars = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        let (scalar, len) = decode_at(data, pos).expect("well-formed buffer failed to decode");
        positions.push(pos);
        scalars.push(scalar);
        pos += len;
    }

    assert_eq!(scalar_count(data), scalars.len());
    assert!(Scalars::new(data).eq(scalars.iter().copied()));

    // Backward walk must revisit the same boundaries in reverse.
    let begin = ScalarCursor::begin(data);
    let mut cursor = ScalarCursor::end(data);
    for (&expected_pos, &expected_scalar) in positions.iter().rev().zip(scalars.iter().rev()) {
        cursor.retreat();
        assert_eq!(cursor.pos(), expected_pos);
        assert_eq!(cursor.get(), expected_scalar);
    }
    assert_eq!(cursor, begin);
});
