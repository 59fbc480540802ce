//! Rotation generation

use super::entry::RotationEntry;

/// Produce every cyclic rotation of `base`, in ascending offset order.
///
/// Offset `i` moves the first `i` chars to the end. An empty string yields
/// no rotations.
///
/// # Example
/// ```
/// use rotator::generate_rotations;
///
/// let rotations = generate_rotations("abc");
/// let strings: Vec<&str> = rotations.iter().map(|r| r.rotation()).collect();
/// assert_eq!(strings, ["abc", "bca", "cab"]);
/// ```
#[must_use]
pub fn generate_rotations(base: &str) -> Vec<RotationEntry> {
    base.char_indices()
        .enumerate()
        .map(|(index, (byte, _))| {
            let (head, tail) = base.split_at(byte);
            RotationEntry::new(index, [tail, head].concat())
        })
        .collect()
}
