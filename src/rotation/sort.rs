//! Orderings over rotation entries
//!
//! Both sorts are stable and return a fresh vector; the input is only
//! borrowed.

use super::entry::RotationEntry;

/// Order entries by ascending offset.
///
/// Entries sharing an offset keep their input order.
#[must_use]
pub fn sort_by_offset(entries: &[RotationEntry]) -> Vec<RotationEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(RotationEntry::index);
    sorted
}

/// Order entries by their rotated string.
///
/// Comparison is plain `str` ordering, which matches Unicode scalar order.
/// Equal rotations keep their input order.
#[must_use]
pub fn sort_lexicographically(entries: &[RotationEntry]) -> Vec<RotationEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.rotation().cmp(b.rotation()));
    sorted
}
