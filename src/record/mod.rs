//! Structured records
//!
//! Serializes rotation sets as JSON Lines for downstream tooling.

pub mod jsonl;

pub use jsonl::{from_jsonl, to_jsonl};
