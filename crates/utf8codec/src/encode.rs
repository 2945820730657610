//! Encoding scalars into minimal UTF-8 byte sequences.

use core::fmt;
use core::ops::Deref;

use bstr::BStr;

use crate::CodePoint;

/// A scalar encoded as one to four UTF-8 bytes, stored inline.
///
/// The bytes live in a fixed four-slot array next to a length tag, so the
/// value can be sliced into a larger buffer without allocating or
/// re-scanning. Dereferences to the occupied byte slice.
///
/// # Examples
///
/// ```
/// use utf8codec::encode_scalar;
///
/// let pi = encode_scalar(0x3A0);
/// assert_eq!(pi.as_bytes(), b"\xCE\xA0");
/// assert_eq!(pi.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EncodedScalar {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedScalar {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes the encoding occupies (1–4).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl Deref for EncodedScalar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedScalar {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedScalar")
            .field(&BStr::new(self.as_bytes()))
            .finish()
    }
}

/// Encodes `scalar` as its minimal UTF-8 byte sequence.
///
/// Length thresholds: `<= 0x7F` one byte, `<= 0x7FF` two, `<= 0xFFFF`
/// three, four otherwise. The bit layout mirrors
/// [`decode_at`](crate::decode_at)'s assembly.
///
/// Encoding is total over `u32`: surrogate values and values above
/// `0x10FFFF` are laid out by the same rules rather than rejected. Reject
/// them after the fact with [`ValidateOptions`](crate::ValidateOptions) if
/// strict conformance is needed.
///
/// # Examples
///
/// ```
/// use utf8codec::encode_scalar;
///
/// assert_eq!(encode_scalar(0x61).as_bytes(), b"a");
/// assert_eq!(encode_scalar(0x20AC).as_bytes(), b"\xE2\x82\xAC");
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn encode_scalar(scalar: CodePoint) -> EncodedScalar {
    let (bytes, len) = if scalar <= 0x7F {
        ([scalar as u8, 0, 0, 0], 1)
    } else if scalar <= 0x7FF {
        (
            [
                0xC0 | ((scalar >> 6) & 0x1F) as u8,
                0x80 | (scalar & 0x3F) as u8,
                0,
                0,
            ],
            2,
        )
    } else if scalar <= 0xFFFF {
        (
            [
                0xE0 | ((scalar >> 12) & 0x0F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
                0,
            ],
            3,
        )
    } else {
        (
            [
                0xF0 | ((scalar >> 18) & 0x07) as u8,
                0x80 | ((scalar >> 12) & 0x3F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ],
            4,
        )
    };
    EncodedScalar { bytes, len }
}
