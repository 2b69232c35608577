//! Extension markers: leading zero-value continuation bytes.
//!
//! A writer that does not yet know how large a value will be can reserve a
//! fixed-width field by filling its front with [`EXTENSION_BYTE`]s and
//! encoding the value into the remainder later. Both groupings fold a
//! zero-value group into a zero accumulator as zero, so the padding never
//! changes the decoded value.

use crate::encoding::EXTENSION_BYTE;
use crate::errors::Error;

/// Returns `true` if `buffer` starts with an extension byte.
#[must_use]
pub fn is_extended(buffer: &[u8]) -> bool {
    buffer.first() == Some(&EXTENSION_BYTE)
}

/// Number of leading extension bytes in `buffer`.
#[must_use]
pub fn extension_len(buffer: &[u8]) -> usize {
    buffer
        .iter()
        .take_while(|&&byte| byte == EXTENSION_BYTE)
        .count()
}

/// Writes `group_count` extension bytes at the front of `buffer`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::InsufficientCapacity`] if `buffer` is shorter than
/// `group_count`. Nothing is written in that case.
pub fn extend(buffer: &mut [u8], group_count: usize) -> Result<usize, Error> {
    let available = buffer.len();
    buffer
        .get_mut(..group_count)
        .ok_or(Error::InsufficientCapacity {
            required: group_count,
            available,
        })?
        .fill(EXTENSION_BYTE);
    Ok(group_count)
}
