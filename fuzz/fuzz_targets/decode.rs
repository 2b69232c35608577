//! Decoder fuzzer over raw bytes.
//!
//! Arbitrary input must never panic, and chunked, one-shot and reversed
//! decoding must agree on the value and the number of bytes consumed.

use honggfuzz::fuzz;
use vlq_rs::testing::test_decode;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_decode(data);
        });
    }
}
