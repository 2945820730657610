//! End-to-end exercise of the public API: the `"a"` + GREEK CAPITAL LETTER
//! PI demonstration flow, null-terminated input, and strict validation.

use std::ffi::CStr;

use bstr::ByteSlice;
use utf8codec::{
    ScalarCursor, Scalars, ValidateOptions, chars, encode_scalar, is_single_scalar,
    is_well_formed, is_well_formed_with, scalar_count,
};

fn pi_buffer() -> Vec<u8> {
    let mut buf = b"a".to_vec();
    buf.extend_from_slice(encode_scalar(chars::GREEK_CAPITAL_LETTER_PI).as_bytes());
    buf
}

#[test]
fn buffer_layout_is_the_documented_one() {
    let buf = pi_buffer();
    assert_eq!(buf.as_bstr(), b"a\xCE\xA0".as_bstr());
    assert!(is_well_formed(&buf));
    assert_eq!(scalar_count(&buf), 2);
}

#[test]
fn forward_and_backward_walk() {
    let buf = pi_buffer();
    let begin = ScalarCursor::begin(&buf);
    let end = ScalarCursor::end(&buf);

    let mut it = begin;
    assert_eq!(it.get(), u32::from(b'a'));
    it.advance();
    assert_eq!(it.get(), chars::GREEK_CAPITAL_LETTER_PI);
    it.advance();
    assert_eq!(it, end);

    it = end;
    it.retreat();
    assert_eq!(it.get(), chars::GREEK_CAPITAL_LETTER_PI);
    it.retreat();
    assert_eq!(it.get(), u32::from(b'a'));
    assert_eq!(it, begin);
}

#[test]
fn null_terminated_input() {
    let s = CStr::from_bytes_with_nul(b"a\xCE\xA0\0").unwrap();

    let scalars: Vec<u32> = Scalars::from_c_str(s).collect();
    assert_eq!(scalars, [u32::from(b'a'), chars::GREEK_CAPITAL_LETTER_PI]);

    let begin = ScalarCursor::begin_c_str(s);
    let end = ScalarCursor::end_c_str(s);
    assert_eq!(begin.pos(), 0);
    // The terminator is excluded from the walk.
    assert_eq!(end.pos(), 3);

    let mut it = begin;
    it.advance();
    it.advance();
    assert_eq!(it, end);
}

#[test]
fn single_scalar_predicate() {
    assert!(is_single_scalar(encode_scalar(chars::GREEK_CAPITAL_LETTER_PI).as_bytes()));
    assert!(!is_single_scalar(&pi_buffer()));
}

#[test]
fn strict_validation_is_opt_in() {
    // Overlong encoding of '/': accepted by default, rejected strictly.
    let overlong_slash = b"\xC0\xAF";
    assert!(is_well_formed(overlong_slash));
    assert!(!is_well_formed_with(overlong_slash, ValidateOptions::strict()));

    // Real text passes both regimes.
    let text = "να πάμε 😀".as_bytes();
    assert!(is_well_formed(text));
    assert!(is_well_formed_with(text, ValidateOptions::strict()));
}
