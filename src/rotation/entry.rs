//! The rotation entry value type

use serde::{Deserialize, Serialize};

/// A single cyclic rotation paired with the offset that produced it
///
/// The offset counts chars, so `index` is the number of leading chars of the
/// base string that were moved to the end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RotationEntry {
    index: usize,
    #[serde(rename = "permutation")]
    rotation: String,
}

impl RotationEntry {
    /// Create an entry from an offset and its rotated string
    #[must_use]
    pub fn new(index: usize, rotation: impl Into<String>) -> Self {
        Self {
            index,
            rotation: rotation.into(),
        }
    }

    /// The rotation offset
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The rotated string
    #[must_use]
    pub fn rotation(&self) -> &str {
        &self.rotation
    }

    /// Length of the rotation in chars
    #[must_use]
    pub fn len(&self) -> usize {
        self.rotation.chars().count()
    }

    /// Returns true for the rotation of an empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotation.is_empty()
    }

    /// Undo the rotation and return the base string it came from.
    ///
    /// Rotates left by `(N - index) mod N` chars. Offsets past the end wrap.
    #[must_use]
    pub fn original(&self) -> String {
        let n = self.len();
        if n == 0 {
            return String::new();
        }
        let split = (n - self.index % n) % n;
        let at = self
            .rotation
            .char_indices()
            .nth(split)
            .map_or(self.rotation.len(), |(byte, _)| byte);
        let (head, tail) = self.rotation.split_at(at);
        [tail, head].concat()
    }
}
