//! Testing utilities shared by the integration tests and the fuzz harnesses.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`byte_diff_report`]: pretty-print a byte-level diff between two buffers
//! - [`assert_encoding`]: check a value against a known forward encoding, in
//!   both forward and reversed mode
//! - [`assert_roundtrip`]: encode and decode a value through every mode
//! - [`assert_progressive`]: decode a value from every possible chunking
//! - [`test_roundtrip`], [`test_decode`], [`test_extension`]: fuzz entry
//!   points taking raw bytes

use core::fmt::Write;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use arbitrary::{Arbitrary, Unstructured};

use crate::encoding::{
    EXTENSION_BYTE, Grouping, MAX_ENCODED_LEN, Minimal, OverflowSafe, is_terminal,
};
use crate::errors::Error;
use crate::extension::{extension_len, is_extended};
use crate::vlq::Vlq;

/// Pretty-print a byte-level diff between two encoded buffers.
///
/// Returns a human-readable string describing where they differ.
#[must_use]
pub fn byte_diff_report(label: &str, expected: &[u8], actual: &[u8]) -> String {
    if expected == actual {
        return format!("{label}: MATCH ({} bytes)", expected.len());
    }

    let mut report = format!(
        "{label}: MISMATCH\n  expected len: {}\n  actual len:   {}\n",
        expected.len(),
        actual.len()
    );

    let min_len = expected.len().min(actual.len());
    let first_diff = (0..min_len).find(|&i| expected[i] != actual[i]);

    if let Some(pos) = first_diff {
        let _ = writeln!(
            report,
            "  first diff at byte {pos}: expected 0x{:02x}, actual 0x{:02x}",
            expected[pos], actual[pos]
        );
    } else {
        report.push_str("  common prefix matches, difference is in length only\n");
    }

    let _ = writeln!(report, "  expected: {expected:02x?}");
    let _ = writeln!(report, "  actual:   {actual:02x?}");

    report
}

fn assert_bytes_eq(label: &str, expected: &[u8], actual: &[u8]) {
    assert!(
        expected == actual,
        "{}",
        byte_diff_report(label, expected, actual)
    );
}

/// Assert that `value` encodes to `expected` and decodes back, forward and
/// reversed.
///
/// The reversed check encodes into a zeroed buffer ten bytes longer than
/// needed and expects `expected` mirrored into its tail.
///
/// # Panics
///
/// Panics with a diff report on any mismatch.
pub fn assert_encoding<G: Grouping>(value: u64, expected: &[u8]) {
    let vlq = Vlq::<G>::new(value);
    let label = format!("{} 0x{value:x}", G::NAME);
    assert_eq!(vlq.encoded_size(), expected.len(), "{label}: encoded size");

    let mut forward = vec![0u8; expected.len()];
    let written = vlq.encode_to(&mut forward).unwrap();
    assert_eq!(written, expected.len(), "{label}: bytes written");
    assert_bytes_eq(&label, expected, &forward);

    let (decoded, progress) = Vlq::<G>::decode(&forward);
    assert!(progress.complete, "{label}: decode incomplete");
    assert_eq!(progress.consumed, expected.len(), "{label}: bytes decoded");
    assert_eq!(decoded.value(), value, "{label}: decoded value");

    let inflated = expected.len() + MAX_ENCODED_LEN;
    let mut mirrored = vec![0u8; inflated];
    for (i, &byte) in expected.iter().enumerate() {
        mirrored[inflated - i - 1] = byte;
    }
    let mut reversed = vec![0u8; inflated];
    let written = vlq.encode_reversed_to(&mut reversed).unwrap();
    assert_eq!(written, expected.len(), "{label}: reversed bytes written");
    assert_bytes_eq(&format!("{label} reversed"), &mirrored, &reversed);

    let (decoded, consumed) = Vlq::<G>::decode_reversed(&reversed).unwrap();
    assert_eq!(consumed, expected.len(), "{label}: reversed bytes decoded");
    assert_eq!(decoded.value(), value, "{label}: reversed decoded value");
}

/// Assert that `value` survives every encode/decode mode unchanged.
///
/// # Panics
///
/// Panics if any mode loses or alters the value.
pub fn assert_roundtrip<G: Grouping>(value: u64) {
    let vlq = Vlq::<G>::new(value);
    let size = vlq.encoded_size();
    assert!((1..=MAX_ENCODED_LEN).contains(&size));

    let bytes = vlq.to_bytes();
    assert_eq!(bytes.len(), size);
    assert!(
        !is_extended(&bytes),
        "{} 0x{value:x}: encoding starts with a zero-value group",
        G::NAME
    );

    let (decoded, progress) = Vlq::<G>::decode(&bytes);
    assert!(progress.complete);
    assert_eq!(progress.consumed, size);
    assert_eq!(decoded, vlq);

    // Reversed, with unrelated bytes in front of the encoded run.
    let mut buffer = [0xffu8; 2 * MAX_ENCODED_LEN];
    assert_eq!(vlq.encode_reversed_to(&mut buffer), Ok(size));
    let (decoded, consumed) = Vlq::<G>::decode_reversed(&buffer).unwrap();
    assert_eq!(consumed, size);
    assert_eq!(decoded, vlq);

    // Padded to the widest field.
    let mut buffer = [0u8; 2 * MAX_ENCODED_LEN];
    let width = 2 * MAX_ENCODED_LEN;
    assert_eq!(vlq.encode_extended_to(&mut buffer, width), Ok(width));
    assert_eq!(extension_len(&buffer), width - size);
    let (decoded, progress) = Vlq::<G>::decode(&buffer);
    assert!(progress.complete);
    assert_eq!(progress.consumed, width);
    assert_eq!(decoded, vlq);
}

/// Assert that decoding `value` gives the same result however its encoding
/// is split across calls to [`Vlq::decode_from`].
///
/// # Panics
///
/// Panics if a chunked decode differs from a one-shot decode, or if
/// `complete` is reported before the last byte.
pub fn assert_progressive<G: Grouping>(value: u64) {
    let bytes = Vlq::<G>::new(value).to_bytes();

    for split in 0..=bytes.len() {
        let (head, tail) = bytes.split_at(split);
        let mut decoded = Vlq::<G>::default();
        let first = decoded.decode_from(head);
        assert_eq!(first.consumed, head.len());
        assert_eq!(first.complete, tail.is_empty());
        if !first.complete {
            let second = decoded.decode_from(tail);
            assert!(second.complete);
            assert_eq!(first.consumed + second.consumed, bytes.len());
        }
        assert_eq!(decoded.value(), value, "split at {split}");
    }

    let mut decoded = Vlq::<G>::default();
    let mut completions = 0;
    for (index, byte) in bytes.iter().enumerate() {
        let progress = decoded.decode_from(core::slice::from_ref(byte));
        assert_eq!(progress.consumed, 1);
        if progress.complete {
            completions += 1;
            assert_eq!(index, bytes.len() - 1);
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(decoded.value(), value);
}

/// Fuzz entry point: round-trips arbitrary values through both groupings.
pub fn test_roundtrip(data: &[u8]) {
    let mut u = Unstructured::new(data);
    while let (Ok(standard), Ok(safe)) = (
        Vlq::<Minimal>::arbitrary(&mut u),
        Vlq::<OverflowSafe>::arbitrary(&mut u),
    ) {
        assert_roundtrip::<Minimal>(standard.value());
        assert_progressive::<Minimal>(standard.value());
        assert_roundtrip::<OverflowSafe>(safe.value());
        assert_progressive::<OverflowSafe>(safe.value());
        if u.is_empty() {
            break;
        }
    }
}

fn check_decode_invariants<G: Grouping>(data: &[u8]) -> Vlq<G> {
    let (whole, progress) = Vlq::<G>::decode(data);
    assert!(progress.consumed <= data.len());
    assert_eq!(progress.complete, data.iter().any(|&b| is_terminal(b)));

    // Any split of the input decodes to the same state.
    for split in 0..=progress.consumed {
        let mut chunked = Vlq::<G>::default();
        let first = chunked.decode_from(&data[..split]);
        let mut consumed = first.consumed;
        if !first.complete {
            consumed += chunked.decode_from(&data[split..]).consumed;
        }
        assert_eq!(consumed, progress.consumed);
        assert_eq!(chunked, whole);
    }

    // Reversed decoding is forward decoding of the mirrored input.
    let mirrored: Vec<u8> = data.iter().rev().copied().collect();
    match Vlq::<G>::decode_reversed(&mirrored) {
        Ok((reversed, consumed)) => {
            assert!(progress.complete);
            assert_eq!(consumed, progress.consumed);
            assert_eq!(reversed, whole);
        }
        Err(err) => {
            assert!(!progress.complete);
            assert_eq!(
                err,
                Error::UnterminatedReversed {
                    scanned: mirrored.len()
                }
            );
        }
    }

    whole
}

/// Fuzz entry point: decodes arbitrary bytes with both groupings.
///
/// Decoding never fails or panics; this checks that chunked, one-shot and
/// reversed decoding agree, and that a standard value short enough not to
/// wrap re-encodes to the bytes it came from, minus any extension bytes.
pub fn test_decode(data: &[u8]) {
    let standard = check_decode_invariants::<Minimal>(data);
    check_decode_invariants::<OverflowSafe>(data);

    let (_, progress) = Vlq::<Minimal>::decode(data);
    if progress.complete {
        let padding = extension_len(&data[..progress.consumed]);
        let run = &data[padding..progress.consumed];
        if run.len() < MAX_ENCODED_LEN {
            assert_bytes_eq("canonical re-encode", run, &standard.to_bytes());
        }
    }
}

/// Fuzz entry point: pads arbitrary values to arbitrary widths.
pub fn test_extension(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(width) = u.int_in_range(0..=3 * MAX_ENCODED_LEN) else {
        return;
    };
    let Ok(vlq) = Vlq::<Minimal>::arbitrary(&mut u) else {
        return;
    };
    check_extension(vlq, width);
    check_extension(Vlq::<OverflowSafe>::new(vlq.value()), width);
}

fn check_extension<G: Grouping>(vlq: Vlq<G>, width: usize) {
    let mut buffer = vec![0u8; width];
    match vlq.encode_extended_to(&mut buffer, width) {
        Ok(written) => {
            assert_eq!(written, width);
            let padding = width - vlq.encoded_size();
            assert_eq!(is_extended(&buffer), padding > 0);
            assert!(buffer[..padding].iter().all(|&b| b == EXTENSION_BYTE));
            let (decoded, progress) = Vlq::<G>::decode(&buffer);
            assert!(progress.complete);
            assert_eq!(progress.consumed, width);
            assert_eq!(decoded, vlq);
        }
        Err(err) => {
            assert!(width < vlq.encoded_size());
            assert_eq!(err.required(), Some(vlq.encoded_size()));
            assert!(buffer.iter().all(|&b| b == 0));
        }
    }
}
