//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::rotation::RotationEntry;

/// The rotations of `"banana"` in offset order.
#[must_use]
pub fn banana_rotations() -> Vec<RotationEntry> {
    [
        "banana", "ananab", "nanaba", "anaban", "nabana", "abanan",
    ]
    .iter()
    .enumerate()
    .map(|(index, rotation)| RotationEntry::new(index, *rotation))
    .collect()
}

/// Flatten entries into `(index, rotation)` pairs for compact assertions.
#[must_use]
pub fn pairs(entries: &[RotationEntry]) -> Vec<(usize, &str)> {
    entries.iter().map(|e| (e.index(), e.rotation())).collect()
}
