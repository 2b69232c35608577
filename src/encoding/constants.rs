//! Constants for the VLQ wire format.

/// High bit of an encoded byte: set when more bytes of the value follow.
pub const CONTINUATION_BIT: u8 = 0x80;

/// Low bits of an encoded byte that carry value data.
pub const PAYLOAD_MASK: u8 = 0x7f;

/// Number of value bits carried by one encoded byte.
pub const BITS_PER_GROUP: u32 = 7;

/// Largest number of bytes any grouping produces for a `u64`.
pub const MAX_ENCODED_LEN: usize = 10;

/// A continuation-only byte holding a zero-value group.
///
/// Decoders fold it into the accumulator as zero, so any number of them may
/// precede an encoded value without changing it.
pub const EXTENSION_BYTE: u8 = CONTINUATION_BIT;

/// Constants specific to the overflow-safe grouping.
pub mod overflow_safe {
    use super::BITS_PER_GROUP;

    /// Bits left over when splitting a `u64` into 7-bit groups.
    pub const EXTRA_BITS: u32 = u64::BITS % BITS_PER_GROUP;

    /// Mask selecting the leftover bits at the low end of the register.
    pub const EXTRA_MASK: u64 = (1 << EXTRA_BITS) - 1;

    /// Left shift placing the leftover bits at the top of a 7-bit group.
    pub const EXTRA_SHIFT: u32 = (BITS_PER_GROUP - EXTRA_BITS) % BITS_PER_GROUP;

    /// Bit position at which each newly decoded group is injected.
    pub const DECODE_SHIFT: u32 = u64::BITS - BITS_PER_GROUP;
}
