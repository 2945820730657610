//! Bidirectional walking over encoded byte buffers.
//!
//! [`ScalarCursor`] is a position into an externally owned buffer that
//! always rests on the lead byte of a sequence (or one past the last byte).
//! Forward moves decode through the trusted fast path; backward moves scan
//! over continuation bytes to the preceding lead byte, so neither direction
//! materializes the decoded sequence. [`Scalars`] adapts a begin/end cursor
//! pair to the standard iterator traits, and [`scalar_count`] walks one to
//! count code points.
//!
//! Invariants
//! - The position lands exactly on a sequence boundary after every advance
//!   and retreat. Constructing a cursor at an arbitrary mid-sequence offset
//!   voids all guarantees.
//! - The buffer must outlive the cursor and stay unmutated while any cursor
//!   over it is live. Cursors are small `Copy` values with no shared state,
//!   so concurrent read-only walks need no synchronization.

use core::ffi::CStr;
use core::fmt;

use bstr::BStr;

use crate::{
    CodePoint,
    classify::is_continuation_byte,
    decode::{ByteReader, read_scalar},
};

/// A bidirectional cursor over an encoded byte buffer.
///
/// Dereference and forward movement use the trusted decode path: walking a
/// malformed buffer is a contract violation (see
/// [`read_scalar`](crate::read_scalar)); validate untrusted input with
/// [`is_well_formed`](crate::is_well_formed) first.
///
/// # Examples
///
/// ```
/// use utf8codec::ScalarCursor;
///
/// let buf = b"a\xCE\xA0";
/// let mut it = ScalarCursor::begin(buf);
/// assert_eq!(it.get(), 0x61);
/// it.advance();
/// assert_eq!(it.get(), 0x3A0);
/// it.advance();
/// assert_eq!(it, ScalarCursor::end(buf));
/// ```
#[derive(Clone, Copy)]
pub struct ScalarCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ScalarCursor<'a> {
    /// Cursor at the first scalar of `bytes`.
    #[must_use]
    pub const fn begin(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Cursor one past the last byte of `bytes`.
    ///
    /// The terminating position is itself a valid boundary: it is where a
    /// forward walk ends and a backward walk starts.
    #[must_use]
    pub const fn end(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: bytes.len(),
        }
    }

    /// Cursor at the first scalar of a null-terminated string, excluding
    /// the terminator.
    #[must_use]
    pub fn begin_c_str(s: &'a CStr) -> Self {
        Self::begin(s.to_bytes())
    }

    /// Cursor at the terminating position of a null-terminated string.
    #[must_use]
    pub fn end_c_str(s: &'a CStr) -> Self {
        Self::end(s.to_bytes())
    }

    /// Byte offset of the cursor into its buffer.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Decodes the scalar under the cursor without moving it.
    ///
    /// Precondition: the cursor is not at the end position.
    #[must_use]
    pub fn get(&self) -> CodePoint {
        let mut probe = *self;
        read_scalar(&mut probe)
    }

    /// Decodes the scalar under the cursor and moves past it, returning the
    /// decoded value.
    ///
    /// Precondition: the cursor is not at the end position.
    pub fn advance(&mut self) -> CodePoint {
        read_scalar(self)
    }

    /// Moves the cursor back to the lead byte of the preceding scalar.
    ///
    /// Steps backward one byte at a time while the byte underfoot matches
    /// the continuation pattern; the first non-continuation byte is the
    /// preceding lead by the boundary invariant.
    ///
    /// Precondition: the cursor is not at the begin position.
    pub fn retreat(&mut self) {
        self.pos -= 1;
        while is_continuation_byte(self.bytes[self.pos]) {
            self.pos -= 1;
        }
    }
}

impl ByteReader for ScalarCursor<'_> {
    fn next_byte(&mut self) -> u8 {
        let byte = self.bytes[self.pos];
        self.pos += 1;
        byte
    }
}

impl PartialEq for ScalarCursor<'_> {
    /// Cursors are equal iff they point into the same buffer at the same
    /// offset. Byte-equal but distinct buffers compare unequal.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.bytes, other.bytes) && self.pos == other.pos
    }
}

impl Eq for ScalarCursor<'_> {}

impl fmt::Debug for ScalarCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarCursor")
            .field("buffer", &BStr::new(self.bytes))
            .field("pos", &self.pos)
            .finish()
    }
}

/// Iterator over the scalars of an encoded byte buffer.
///
/// Yields code points front to back; as a [`DoubleEndedIterator`] it walks
/// the tail end backward over the same unvisited middle. Built on
/// [`ScalarCursor`], so the same trusted-input contract applies.
///
/// # Examples
///
/// ```
/// use utf8codec::Scalars;
///
/// let scalars: Vec<u32> = Scalars::new(b"a\xCE\xA0").collect();
/// assert_eq!(scalars, [0x61, 0x3A0]);
/// ```
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    front: ScalarCursor<'a>,
    back: ScalarCursor<'a>,
}

impl<'a> Scalars<'a> {
    /// Iterator over the scalars of `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            front: ScalarCursor::begin(bytes),
            back: ScalarCursor::end(bytes),
        }
    }

    /// Iterator over the scalars of a null-terminated string, excluding the
    /// terminator.
    #[must_use]
    pub fn from_c_str(s: &'a CStr) -> Self {
        Self::new(s.to_bytes())
    }
}

impl Iterator for Scalars<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        if self.front == self.back {
            return None;
        }
        Some(self.front.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.back.pos() - self.front.pos();
        // Each scalar occupies between one and four bytes.
        (bytes.div_ceil(4), Some(bytes))
    }
}

impl DoubleEndedIterator for Scalars<'_> {
    fn next_back(&mut self) -> Option<CodePoint> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl core::iter::FusedIterator for Scalars<'_> {}

/// Number of scalars encoded in `bytes`.
///
/// A single forward walk from begin to end, one increment per advance; O(n)
/// in byte length with no allocation. Does not validate — malformed input
/// falls under the trusted-path contract of
/// [`read_scalar`](crate::read_scalar), so validate untrusted bytes first.
///
/// # Examples
///
/// ```
/// use utf8codec::scalar_count;
///
/// assert_eq!(scalar_count("aΠ€😀".as_bytes()), 4);
/// ```
#[must_use]
pub fn scalar_count(bytes: &[u8]) -> usize {
    let mut cursor = ScalarCursor::begin(bytes);
    let end = ScalarCursor::end(bytes);
    let mut count = 0;
    while cursor != end {
        cursor.advance();
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ScalarCursor, Scalars, scalar_count};

    #[test]
    fn get_does_not_move() {
        let buf = b"a\xCE\xA0";
        let it = ScalarCursor::begin(buf);
        assert_eq!(it.get(), 0x61);
        assert_eq!(it.get(), 0x61);
        assert_eq!(it.pos(), 0);
    }

    #[test]
    fn advance_lands_on_lead_bytes() {
        let buf = "aΠ€😀".as_bytes();
        let mut it = ScalarCursor::begin(buf);
        assert_eq!(it.advance(), 0x61);
        assert_eq!(it.pos(), 1);
        assert_eq!(it.advance(), 0x3A0);
        assert_eq!(it.pos(), 3);
        assert_eq!(it.advance(), 0x20AC);
        assert_eq!(it.pos(), 6);
        assert_eq!(it.advance(), 0x1F600);
        assert_eq!(it, ScalarCursor::end(buf));
    }

    #[test]
    fn retreat_scans_to_previous_lead() {
        let buf = "aΠ€😀".as_bytes();
        let mut it = ScalarCursor::end(buf);
        it.retreat();
        assert_eq!(it.get(), 0x1F600);
        it.retreat();
        assert_eq!(it.get(), 0x20AC);
        it.retreat();
        assert_eq!(it.get(), 0x3A0);
        it.retreat();
        assert_eq!(it.get(), 0x61);
        assert_eq!(it, ScalarCursor::begin(buf));
    }

    #[test]
    fn equality_is_per_buffer() {
        let a = b"ab";
        let b = b"ab";
        assert_eq!(ScalarCursor::begin(a), ScalarCursor::begin(a));
        assert_ne!(ScalarCursor::begin(a), ScalarCursor::end(a));
        // Same contents, distinct buffers: not the same walk.
        assert_ne!(ScalarCursor::begin(a), ScalarCursor::begin(b));
    }

    #[test]
    fn empty_buffer_begin_equals_end() {
        let buf = b"";
        assert_eq!(ScalarCursor::begin(buf), ScalarCursor::end(buf));
        assert_eq!(scalar_count(buf), 0);
        assert_eq!(Scalars::new(buf).next(), None);
    }

    #[test]
    fn scalars_iterates_both_ways() {
        let buf = "aΠ€😀".as_bytes();
        let forward: Vec<u32> = Scalars::new(buf).collect();
        assert_eq!(forward, [0x61, 0x3A0, 0x20AC, 0x1F600]);

        let backward: Vec<u32> = Scalars::new(buf).rev().collect();
        assert_eq!(backward, [0x1F600, 0x20AC, 0x3A0, 0x61]);
    }

    #[test]
    fn scalars_meet_in_the_middle() {
        let buf = "aΠ€😀".as_bytes();
        let mut it = Scalars::new(buf);
        assert_eq!(it.next(), Some(0x61));
        assert_eq!(it.next_back(), Some(0x1F600));
        assert_eq!(it.next(), Some(0x3A0));
        assert_eq!(it.next_back(), Some(0x20AC));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn size_hint_brackets_the_count() {
        let buf = "aΠ€😀".as_bytes();
        let it = Scalars::new(buf);
        let (lower, upper) = it.size_hint();
        let count = it.count();
        assert!(lower <= count);
        assert!(count <= upper.unwrap());
    }

    #[test]
    fn count_matches_std_for_valid_text() {
        for text in ["", "ascii only", "aΠ€😀", "ααβγδ", "🎼🎼🎼"] {
            assert_eq!(scalar_count(text.as_bytes()), text.chars().count());
        }
    }
}
