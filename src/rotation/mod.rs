//! Cyclic rotations of a string
//!
//! This module generates the full rotation set of a string and orders it
//! either by offset or lexicographically.

pub mod entry;
pub mod generate;
pub mod sort;

pub use entry::RotationEntry;
pub use generate::generate_rotations;
pub use sort::{sort_by_offset, sort_lexicographically};
