//! Fuzzer for fixed-width fields padded with extension bytes.

use honggfuzz::fuzz;
use vlq_rs::testing::test_extension;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_extension(data);
        });
    }
}
