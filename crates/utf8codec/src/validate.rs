//! Whole-buffer well-formedness checks.

use crate::{
    CodePoint, decode::decode_at, encode::encode_scalar, error::DecodeError,
    options::ValidateOptions,
};

/// Returns `true` if `bytes` is a well-formed sequence of encoded scalars.
///
/// Decodes checked from position zero, advancing by each consumed length,
/// and short-circuits on the first failure — no byte past it is examined.
/// The empty buffer is well-formed. Like the checked decoder, this accepts
/// overlong encodings, surrogates, and out-of-range values; tighten with
/// [`is_well_formed_with`].
///
/// # Examples
///
/// ```
/// use utf8codec::is_well_formed;
///
/// assert!(is_well_formed("aΠ€😀".as_bytes()));
/// assert!(!is_well_formed(b"\x80")); // stray continuation byte
/// assert!(!is_well_formed(b"\xE2")); // truncated sequence
/// ```
#[must_use]
pub fn is_well_formed(bytes: &[u8]) -> bool {
    is_well_formed_with(bytes, ValidateOptions::default())
}

/// [`is_well_formed`] with per-scalar strictness checks from `options`.
#[must_use]
pub fn is_well_formed_with(bytes: &[u8], options: ValidateOptions) -> bool {
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_at(bytes, pos) {
            Ok((scalar, len)) if permits(options, scalar, len) => pos += len,
            Ok(_) | Err(_) => return false,
        }
    }
    true
}

/// Returns `true` if `bytes` holds exactly one encoded scalar and nothing
/// else.
///
/// A single checked decode must consume the entire buffer; empty buffers,
/// trailing bytes, and malformed sequences all fail.
#[must_use]
pub fn is_single_scalar(bytes: &[u8]) -> bool {
    matches!(decode_at(bytes, 0), Ok((_, len)) if len == bytes.len())
}

fn permits(options: ValidateOptions, scalar: CodePoint, len: usize) -> bool {
    if options.reject_overlong && encode_scalar(scalar).len() < len {
        return false;
    }
    if options.reject_surrogates && (0xD800..=0xDFFF).contains(&scalar) {
        return false;
    }
    if options.reject_out_of_range && scalar > 0x10_FFFF {
        return false;
    }
    true
}

/// Decode-walks `bytes`, reporting the first checked-decode failure.
///
/// The position-annotated sibling of [`is_well_formed`], for callers that
/// want to say where a buffer went wrong rather than only that it did.
///
/// # Errors
///
/// Returns the offset of the failed sequence along with the underlying
/// [`DecodeError`].
pub fn first_error(bytes: &[u8]) -> Result<(), (usize, DecodeError)> {
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_at(bytes, pos) {
            Ok((_, len)) => pos += len,
            Err(err) => return Err((pos, err)),
        }
    }
    Ok(())
}
