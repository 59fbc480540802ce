//! Rotator - cyclic string rotations
//!
//! Generates every rotation of a string paired with its offset, and orders
//! the set either by offset or lexicographically, as used by sorting-based
//! text transforms.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod display;
pub mod record;
pub mod rotation;
pub mod rotator;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use config::{RotationOrder, RotatorConfig};
pub use display::render_table;
pub use record::{from_jsonl, to_jsonl};
pub use rotation::{generate_rotations, sort_by_offset, sort_lexicographically, RotationEntry};
pub use rotator::Rotator;
