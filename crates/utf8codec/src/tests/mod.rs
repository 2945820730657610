//! Cross-module tests: round-trip tables, the end-to-end walk, and
//! property tests over arbitrary scalar sequences.

mod roundtrip;
