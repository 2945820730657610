//! Named code point constants.
//!
//! A small table of scalar values named after their Unicode character
//! names, for callers (and the demonstration program) that want to spell a
//! code point by name instead of by number.

use crate::CodePoint;

/// U+0000 NULL.
pub const NULL: CodePoint = 0x0000;
/// U+0009 CHARACTER TABULATION.
pub const CHARACTER_TABULATION: CodePoint = 0x0009;
/// U+000A LINE FEED.
pub const LINE_FEED: CodePoint = 0x000A;
/// U+000D CARRIAGE RETURN.
pub const CARRIAGE_RETURN: CodePoint = 0x000D;
/// U+0020 SPACE.
pub const SPACE: CodePoint = 0x0020;

/// U+0391 GREEK CAPITAL LETTER ALPHA.
pub const GREEK_CAPITAL_LETTER_ALPHA: CodePoint = 0x0391;
/// U+0394 GREEK CAPITAL LETTER DELTA.
pub const GREEK_CAPITAL_LETTER_DELTA: CodePoint = 0x0394;
/// U+03A0 GREEK CAPITAL LETTER PI.
pub const GREEK_CAPITAL_LETTER_PI: CodePoint = 0x03A0;
/// U+03A3 GREEK CAPITAL LETTER SIGMA.
pub const GREEK_CAPITAL_LETTER_SIGMA: CodePoint = 0x03A3;
/// U+03A9 GREEK CAPITAL LETTER OMEGA.
pub const GREEK_CAPITAL_LETTER_OMEGA: CodePoint = 0x03A9;
/// U+03B1 GREEK SMALL LETTER ALPHA.
pub const GREEK_SMALL_LETTER_ALPHA: CodePoint = 0x03B1;
/// U+03C0 GREEK SMALL LETTER PI.
pub const GREEK_SMALL_LETTER_PI: CodePoint = 0x03C0;

/// U+20AC EURO SIGN.
pub const EURO_SIGN: CodePoint = 0x20AC;
/// U+2022 BULLET.
pub const BULLET: CodePoint = 0x2022;
/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: CodePoint = 0xFFFD;

/// U+1D11E MUSICAL SYMBOL G CLEF.
pub const MUSICAL_SYMBOL_G_CLEF: CodePoint = 0x1D11E;
/// U+1F600 GRINNING FACE.
pub const GRINNING_FACE: CodePoint = 0x1F600;
