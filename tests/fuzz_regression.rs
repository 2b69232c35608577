//! Regression tests replaying inputs through the fuzz entry points.
//!
//! | Harness     | Entry point                        |
//! |-------------|------------------------------------|
//! | `roundtrip` | [`vlq_rs::testing::test_roundtrip`] |
//! | `decode`    | [`vlq_rs::testing::test_decode`]    |
//! | `extension` | [`vlq_rs::testing::test_extension`] |
#![cfg(feature = "testing")]

use vlq_rs::testing::{test_decode, test_extension, test_roundtrip};

#[test]
fn fuzz_regression_empty_inputs() {
    test_roundtrip(&[]);
    test_decode(&[]);
    test_extension(&[]);
}

/// Eleven continuation bytes followed by a terminal byte: more groups than a
/// `u64` holds, so the accumulator wraps. Decoding must still agree across
/// chunkings and not panic.
#[test]
fn fuzz_regression_overlong_run_wraps() {
    let mut input = [0xffu8; 12];
    input[11] = 0x7f;
    test_decode(&input);
}

/// Extension bytes in front of a canonical encoding re-encode without them.
#[test]
fn fuzz_regression_extension_prefix_is_stripped() {
    test_decode(&[0x80, 0x80, 0x80, 0xc0, 0x05]);
    test_decode(&[0x80, 0x00]);
}

/// Only continuation bytes: incomplete forward, failed reversed.
#[test]
fn fuzz_regression_unterminated() {
    test_decode(&[0x80; 16]);
    test_decode(&[0x81, 0xff, 0xc0]);
}

/// Trailing bytes after the terminal byte are left unconsumed.
#[test]
fn fuzz_regression_trailing_bytes() {
    test_decode(&[0x05, 0x80, 0x81]);
    test_decode(&[0xc0, 0x82, 0xa0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x33]);
}

#[test]
fn fuzz_regression_roundtrip_all_ones() {
    test_roundtrip(&[0xff; 64]);
    test_roundtrip(&[0x00, 0x3f, 0x01, 0x00, 0x3f, 0x02, 0x01, 0x00]);
}

#[test]
fn fuzz_regression_extension_widths() {
    // Width 0 with value 0: the encoding needs one byte.
    test_extension(&[0x00, 0x00, 0x00, 0x00]);
    test_extension(&[0xff; 16]);
    test_extension(&[0x0a, 0x3f, 0x03]);
}
