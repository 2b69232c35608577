#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]
#![allow(private_bounds, private_interfaces)]

#[cfg(feature = "testing")]
extern crate alloc;

pub mod encoding;
pub mod errors;
pub mod extension;
#[cfg(feature = "testing")]
pub mod testing;
pub mod vlq;

// Re-export main types
pub use encoding::{Minimal, OverflowSafe};
pub use extension::{extend, extension_len, is_extended};
pub use vlq::{EncodedBytes, Progress, Vlq};

// Type aliases for common use cases
/// Type alias for `Vlq<Minimal>`.
///
/// Minimal big-endian base-128: the shortest encoding, most significant group
/// first.
pub type StandardVlq = Vlq<Minimal>;

/// Type alias for `Vlq<OverflowSafe>`.
///
/// Groups anchored at the top of the 64-bit register, with a leading one-bit
/// group when bit 0 is set. Always at most ten bytes.
pub type OverflowSafeVlq = Vlq<OverflowSafe>;

// Re-export errors
pub use errors::Error;
