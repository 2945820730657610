//! Walks a small mixed-width buffer both ways: the ASCII letter `a`
//! followed by the two-byte encoding of GREEK CAPITAL LETTER PI.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utf8codec --example pi_walk
//! ```

use utf8codec::{ScalarCursor, Scalars, chars, encode_scalar, is_well_formed, scalar_count};

fn main() {
    let mut buf = b"a".to_vec();
    buf.extend_from_slice(encode_scalar(chars::GREEK_CAPITAL_LETTER_PI).as_bytes());

    assert!(is_well_formed(&buf));
    println!(
        "buffer {:02X?}: {} bytes, {} scalars",
        buf,
        buf.len(),
        scalar_count(&buf)
    );

    for scalar in Scalars::new(&buf) {
        match char::from_u32(scalar) {
            Some(ch) => println!("forward  U+{scalar:04X} '{ch}'"),
            None => println!("forward  U+{scalar:04X} (not a scalar value)"),
        }
    }

    let begin = ScalarCursor::begin(&buf);
    let mut it = ScalarCursor::end(&buf);
    while it != begin {
        it.retreat();
        println!("backward U+{:04X}", it.get());
    }
}
