//! A minimal UTF-8 codec: conversions between raw bytes and Unicode scalar
//! values, plus a bidirectional cursor that walks an encoded buffer one code
//! point at a time without materializing the decoded sequence.
//!
//! Overview
//! - [`ScalarLen`] classifies a lead byte into a sequence length.
//! - [`decode_at`] is the checked decoder: truncation, stray continuation
//!   bytes, and reserved lead patterns come back as [`DecodeError`] values.
//! - [`read_scalar`] is the trusted fast path, generic over any
//!   [`ByteReader`]; [`ScalarCursor`] and [`Scalars`] are built on it.
//! - [`encode_scalar`] produces the minimal 1–4 byte encoding inline, with
//!   no allocation, as an [`EncodedScalar`].
//! - [`is_well_formed`] and [`is_single_scalar`] validate whole buffers;
//!   [`ValidateOptions`] optionally tightens them to strict Unicode rules.
//!
//! The codec never owns buffer storage: every operation borrows its input
//! for the duration of the call or cursor lifetime. All operations are pure
//! and synchronous, so concurrent read-only use over a shared buffer needs
//! no synchronization.
//!
//! Two error-handling regimes coexist deliberately. The checked path
//! reports failures as values and examines no byte past the first error.
//! The trusted path ([`read_scalar`] and everything layered on it) treats
//! malformed input as a programming error: bit-pattern violations trip
//! debug assertions, and release builds produce unspecified values (never
//! memory unsafety). Validate untrusted bytes before walking them.
//!
//! By design, neither `decode_at` nor `encode_scalar` rejects overlong
//! encodings, surrogate values, or values above `0x10FFFF`; strictness is
//! opt-in through [`ValidateOptions`].

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod classify;
mod cursor;
mod decode;
mod encode;
mod error;
mod options;
mod validate;

pub mod chars;

#[cfg(test)]
mod tests;

pub use classify::{ScalarLen, is_continuation_byte};
pub use cursor::{ScalarCursor, Scalars, scalar_count};
pub use decode::{ByteReader, decode_at, read_scalar};
pub use encode::{EncodedScalar, encode_scalar};
pub use error::DecodeError;
pub use options::ValidateOptions;
pub use validate::{first_error, is_single_scalar, is_well_formed, is_well_formed_with};

/// A Unicode code point, stored as a plain 32-bit value.
///
/// The codec does not distinguish valid-range scalars from full-width
/// storage: surrogate values and values above `0x10FFFF` are representable
/// and encodable, and rejecting them is the validator's job (see
/// [`ValidateOptions`]). `char` is deliberately not used here, since it
/// cannot hold the relaxed range.
pub type CodePoint = u32;
