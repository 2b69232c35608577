//! Bit-level building blocks of the VLQ wire format.
//!
//! Every encoded byte carries 7 bits of value data in its low bits and a
//! continuation flag in its high bit. The grouping policies decide how the
//! bits of a `u64` are distributed over those bytes.

pub mod constants;
pub mod grouping;

pub use constants::{CONTINUATION_BIT, EXTENSION_BYTE, MAX_ENCODED_LEN, PAYLOAD_MASK};
pub(crate) use grouping::Grouping;
pub use grouping::{Minimal, OverflowSafe};

/// Returns `true` if `byte` is the last byte of an encoded value.
#[inline]
#[must_use]
pub const fn is_terminal(byte: u8) -> bool {
    byte & CONTINUATION_BIT == 0
}
