//! Strict-validation configuration.

/// Configuration options for
/// [`is_well_formed_with`](crate::is_well_formed_with).
///
/// The codec's reference behavior accepts three classes of technically
/// invalid input: overlong encodings, encoded surrogate values, and values
/// above `0x10FFFF`. Each flag here tightens one of them on the checked
/// validation path; the trusted cursor path is never affected.
///
/// # Examples
///
/// ```
/// use utf8codec::{ValidateOptions, is_well_formed, is_well_formed_with};
///
/// // 0xC0 0x80 is the overlong two-byte encoding of NUL.
/// assert!(is_well_formed(b"\xC0\x80"));
/// let strict = ValidateOptions {
///     reject_overlong: true,
///     ..Default::default()
/// };
/// assert!(!is_well_formed_with(b"\xC0\x80", strict));
/// ```
///
/// # Default
///
/// All options default to `false`, matching the relaxed reference behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Reject sequences that encode a value in more bytes than its minimal
    /// encoding requires.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_overlong: bool,

    /// Reject scalars in the surrogate range `0xD800..=0xDFFF`.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogates: bool,

    /// Reject scalars above `0x10FFFF`, the top of the Unicode range.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_out_of_range: bool,
}

impl ValidateOptions {
    /// The three flags together: strict Unicode scalar-value conformance,
    /// equivalent to what `core::str::from_utf8` enforces.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_overlong: true,
            reject_surrogates: true,
            reject_out_of_range: true,
        }
    }
}
