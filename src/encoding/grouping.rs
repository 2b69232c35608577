//! Grouping policies deciding how a `u64` is split into 7-bit groups.
//!
//! Both policies emit the same byte shape (7 data bits, high bit set on every
//! byte but the last); they differ in which end of the register the groups
//! are anchored to:
//!
//! - [`Minimal`] anchors groups at bit 0 and emits them most-significant first,
//!   so the encoding is as short as the highest set bit allows.
//! - [`OverflowSafe`] anchors groups at bit 63 and emits them from the low end
//!   of what remains, so the encoding is as short as the *lowest* set bit
//!   allows. Since 64 = 9 × 7 + 1, a value with bit 0 set needs a tenth
//!   group holding that single leftover bit, which is emitted first.

use core::fmt::Debug;
use core::hash::Hash;

use super::constants::overflow_safe::{DECODE_SHIFT, EXTRA_BITS, EXTRA_MASK, EXTRA_SHIFT};
use super::constants::{BITS_PER_GROUP, CONTINUATION_BIT, MAX_ENCODED_LEN, PAYLOAD_MASK};

/// Trait defining how a grouping policy lays a value out on the wire.
pub(crate) trait Grouping:
    Debug + Default + Clone + Copy + PartialEq + Eq + Hash + PartialOrd + Ord + 'static
{
    /// Short human-readable name, used in diagnostics.
    const NAME: &'static str;

    /// Number of bytes the encoding of `value` occupies, between 1 and
    /// [`MAX_ENCODED_LEN`].
    fn encoded_size(value: u64) -> usize;

    /// Writes the encoding of `value` into `dst`, first byte first.
    ///
    /// `dst` must be exactly [`Grouping::encoded_size`] bytes long.
    fn write_groups(value: u64, dst: &mut [u8]);

    /// Folds one encoded byte into a decode accumulator.
    fn accumulate(accumulator: u64, byte: u8) -> u64;
}

/// The low 7 bits of `value` as a byte with the continuation bit clear.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn low_group(value: u64) -> u8 {
    (value & u64::from(PAYLOAD_MASK)) as u8
}

/// Minimal big-endian base-128 grouping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Minimal;

impl Grouping for Minimal {
    const NAME: &'static str = "standard";

    #[inline]
    fn encoded_size(value: u64) -> usize {
        let significant_bits = u64::BITS - value.leading_zeros();
        significant_bits.div_ceil(BITS_PER_GROUP).max(1) as usize
    }

    fn write_groups(value: u64, dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), Self::encoded_size(value));

        // Filled back to front: the last byte holds the least significant group.
        let mut value = value;
        let mut continuation = 0;
        for slot in dst.iter_mut().rev() {
            *slot = low_group(value) | continuation;
            continuation = CONTINUATION_BIT;
            value >>= BITS_PER_GROUP;
        }
    }

    #[inline]
    fn accumulate(accumulator: u64, byte: u8) -> u64 {
        (accumulator << BITS_PER_GROUP) | u64::from(byte & PAYLOAD_MASK)
    }
}

/// Top-anchored grouping that covers the full `u64` range in at most ten
/// bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverflowSafe;

impl OverflowSafe {
    /// Number of left shifts by 7 it takes for `value` to overflow to zero.
    #[inline]
    fn group_count(value: u64) -> u32 {
        let significant_bits = u64::BITS - value.trailing_zeros();
        significant_bits.div_ceil(BITS_PER_GROUP).max(1)
    }
}

impl Grouping for OverflowSafe {
    const NAME: &'static str = "overflow-safe";

    #[inline]
    fn encoded_size(value: u64) -> usize {
        Self::group_count(value) as usize
    }

    fn write_groups(value: u64, dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), Self::encoded_size(value));

        let mut value = value;
        let first_group = if value & EXTRA_MASK == 0 {
            // Drop the unused low bits so the groups line up at bit 0.
            value >>= u64::BITS - BITS_PER_GROUP * Self::group_count(value);
            0
        } else {
            // Only reachable with all ten groups in use.
            debug_assert_eq!(dst.len(), MAX_ENCODED_LEN);
            dst[0] = (low_group(value & EXTRA_MASK) << EXTRA_SHIFT) | CONTINUATION_BIT;
            value >>= EXTRA_BITS;
            1
        };

        let last = dst.len() - 1;
        for (index, slot) in dst.iter_mut().enumerate().skip(first_group) {
            let continuation = if index < last { CONTINUATION_BIT } else { 0 };
            *slot = low_group(value) | continuation;
            value >>= BITS_PER_GROUP;
        }
    }

    #[inline]
    fn accumulate(accumulator: u64, byte: u8) -> u64 {
        (accumulator >> BITS_PER_GROUP) | (u64::from(byte & PAYLOAD_MASK) << DECODE_SHIFT)
    }
}
