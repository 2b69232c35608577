//! The [`Vlq`] value type and its encode/decode operations.
//!
//! A [`Vlq`] is a plain `u64` register tagged with a grouping policy. The same
//! register serves as the value to encode and as the accumulator of a decode
//! in progress, which is what makes forward decoding resumable:
//!
//! ```
//! use vlq_rs::StandardVlq;
//!
//! let mut buffer = [0u8; 3];
//! let written = StandardVlq::new(30000).encode_to(&mut buffer).unwrap();
//! assert_eq!(written, 3);
//!
//! let mut decoded = StandardVlq::default();
//! let first = decoded.decode_from(&buffer[..2]);
//! assert!(!first.complete);
//! let second = decoded.decode_from(&buffer[2..]);
//! assert!(second.complete);
//! assert_eq!(decoded.value(), 30000);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

use crate::encoding::{Grouping, MAX_ENCODED_LEN, Minimal, is_terminal};
use crate::errors::Error;
use crate::extension::extend;

/// An unsigned 64-bit value encoded with the grouping policy `G`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vlq<G> {
    value: u64,
    grouping: PhantomData<G>,
}

/// Outcome of one forward decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub struct Progress {
    /// Number of bytes folded into the accumulator by this step.
    pub consumed: usize,
    /// Whether the terminal byte of the value was reached.
    pub complete: bool,
}

/// Encoded form of a [`Vlq`], held inline without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBytes {
    bytes: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl Deref for EncodedBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for EncodedBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl<G: Grouping> Vlq<G> {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            grouping: PhantomData,
        }
    }

    /// Returns the wrapped value (or the accumulator of a decode in progress).
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of bytes [`Vlq::encode_to`] writes for this value.
    #[must_use]
    pub fn encoded_size(self) -> usize {
        G::encoded_size(self.value)
    }

    /// Encodes the value into the front of `buffer`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientCapacity`] if `buffer` is shorter than
    /// [`Vlq::encoded_size`]. Nothing is written in that case.
    pub fn encode_to(self, buffer: &mut [u8]) -> Result<usize, Error> {
        let size = self.encoded_size();
        let available = buffer.len();
        let dst = buffer
            .get_mut(..size)
            .ok_or(Error::InsufficientCapacity {
                required: size,
                available,
            })?;
        G::write_groups(self.value, dst);
        Ok(size)
    }

    /// Continues decoding from `buffer`, folding bytes into this value until
    /// the terminal byte is seen.
    ///
    /// If the buffer runs out first, the partial value is kept and
    /// [`Progress::complete`] is `false`; the next chunk of input can then be
    /// fed to the same instance. Start from [`Vlq::default`] for a new value.
    pub fn decode_from(&mut self, buffer: &[u8]) -> Progress {
        for (index, &byte) in buffer.iter().enumerate() {
            self.value = G::accumulate(self.value, byte);
            if is_terminal(byte) {
                return Progress {
                    consumed: index + 1,
                    complete: true,
                };
            }
        }
        Progress {
            consumed: buffer.len(),
            complete: false,
        }
    }

    /// Decodes a fresh value from the front of `buffer`.
    #[must_use]
    pub fn decode(buffer: &[u8]) -> (Self, Progress) {
        let mut vlq = Self::default();
        let progress = vlq.decode_from(buffer);
        (vlq, progress)
    }

    /// Encodes the value into the end of `buffer`, mirrored so that it can be
    /// read back by scanning from the last byte.
    ///
    /// The first byte of the forward encoding lands at the last index of
    /// `buffer` and the terminal byte lands lowest. Bytes in front of the
    /// encoded run are left untouched. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientCapacity`] if `buffer` is shorter than
    /// [`Vlq::encoded_size`]. Nothing is written in that case.
    pub fn encode_reversed_to(self, buffer: &mut [u8]) -> Result<usize, Error> {
        let size = self.encoded_size();
        let available = buffer.len();
        let start = available
            .checked_sub(size)
            .ok_or(Error::InsufficientCapacity {
                required: size,
                available,
            })?;
        let tail = &mut buffer[start..];
        G::write_groups(self.value, tail);
        tail.reverse();
        Ok(size)
    }

    /// Decodes a value written by [`Vlq::encode_reversed_to`], scanning from
    /// the last byte of `buffer` toward the first.
    ///
    /// Unlike [`Vlq::decode_from`] this is not resumable: the whole encoded
    /// run must be present. Returns the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnterminatedReversed`] if no terminal byte is found.
    /// `self` is left unchanged in that case.
    pub fn decode_reversed_from(&mut self, buffer: &[u8]) -> Result<usize, Error> {
        let mut accumulator = self.value;
        for (index, &byte) in buffer.iter().rev().enumerate() {
            accumulator = G::accumulate(accumulator, byte);
            if is_terminal(byte) {
                self.value = accumulator;
                return Ok(index + 1);
            }
        }
        Err(Error::UnterminatedReversed {
            scanned: buffer.len(),
        })
    }

    /// Decodes a fresh value from the end of `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnterminatedReversed`] if no terminal byte is found.
    pub fn decode_reversed(buffer: &[u8]) -> Result<(Self, usize), Error> {
        let mut vlq = Self::default();
        let consumed = vlq.decode_reversed_from(buffer)?;
        Ok((vlq, consumed))
    }

    /// Encodes the value into exactly `width` bytes at the front of `buffer`,
    /// padding with leading extension bytes.
    ///
    /// Decoders read the padding as zero-value groups, so the decoded value is
    /// unchanged. Returns `width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientCapacity`] if `width` is smaller than
    /// [`Vlq::encoded_size`] or `buffer` is shorter than `width`.
    pub fn encode_extended_to(self, buffer: &mut [u8], width: usize) -> Result<usize, Error> {
        let size = self.encoded_size();
        if width < size {
            return Err(Error::InsufficientCapacity {
                required: size,
                available: width,
            });
        }
        let available = buffer.len();
        let field = buffer
            .get_mut(..width)
            .ok_or(Error::InsufficientCapacity {
                required: width,
                available,
            })?;
        let (padding, encoded) = field.split_at_mut(width - size);
        extend(padding, width - size)?;
        G::write_groups(self.value, encoded);
        Ok(width)
    }

    /// Encodes the value into an inline buffer.
    #[must_use]
    pub fn to_bytes(self) -> EncodedBytes {
        let mut bytes = [0u8; MAX_ENCODED_LEN];
        let len = self.encoded_size();
        G::write_groups(self.value, &mut bytes[..len]);
        EncodedBytes { bytes, len }
    }
}

impl Vlq<Minimal> {
    /// Largest value whose standard encoding fits in `byte_count` bytes.
    ///
    /// Saturates at `u64::MAX` from ten bytes on.
    #[must_use]
    pub fn max_value_in_bytes(byte_count: usize) -> u64 {
        if byte_count >= MAX_ENCODED_LEN {
            return u64::MAX;
        }
        (1u64 << (7 * byte_count)) - 1
    }
}

impl<G: Grouping> From<u64> for Vlq<G> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<G> From<Vlq<G>> for u64 {
    fn from(vlq: Vlq<G>) -> Self {
        vlq.value
    }
}

impl<G: Grouping> fmt::Debug for Vlq<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vlq")
            .field("grouping", &G::NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<G> fmt::Display for Vlq<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// ============================================================================
// Arbitrary implementations for testing
// ============================================================================

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::Vlq;
    use crate::encoding::Grouping;
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a, G: Grouping> Arbitrary<'a> for Vlq<G> {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            // Bias toward powers of two and their neighbours, where group
            // boundaries fall.
            let bit: u32 = u.int_in_range(0..=63)?;
            let value = match u.int_in_range(0..=3u8)? {
                0 => u.arbitrary()?,
                1 => 1u64 << bit,
                2 => (1u64 << bit) - 1,
                _ => u64::MAX << bit,
            };
            Ok(Self::new(value))
        }
    }
}
