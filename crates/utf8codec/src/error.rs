//! Failure values for the checked decode path.

use thiserror::Error;

/// Reasons a checked decode can fail.
///
/// Reported by [`decode_at`](crate::decode_at) and short-circuiting
/// [`is_well_formed`](crate::is_well_formed). The trusted cursor path treats
/// the same conditions as contract violations instead of returning them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte at the decode position cannot start a sequence: either a
    /// stray continuation byte or a reserved `11111xxx` pattern.
    #[error("invalid lead byte 0x{0:02X}")]
    InvalidLeadByte(u8),

    /// The lead byte classified a sequence longer than the bytes remaining
    /// in the buffer.
    #[error("truncated sequence: need {needed} bytes, {remaining} remain")]
    Truncated {
        /// Bytes the classified sequence requires.
        needed: usize,
        /// Bytes actually remaining from the decode position.
        remaining: usize,
    },

    /// A non-first byte of the sequence does not match `10xxxxxx`.
    #[error("malformed continuation byte 0x{found:02X} at offset {offset}")]
    MalformedContinuation {
        /// The offending byte.
        found: u8,
        /// Byte offset of the offending byte in the buffer.
        offset: usize,
    },
}
