//! Round-trip fuzzer for both groupings.
//!
//! Tests that encode → decode yields the original value in forward, reversed
//! and padded mode, and that every chunking of the input decodes the same.

use honggfuzz::fuzz;
use vlq_rs::testing::test_roundtrip;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_roundtrip(data);
        });
    }
}
