//! Rotator configuration
//!
//! Parses TOML text into the ordering and rendering options used by
//! [`Rotator`](crate::Rotator).

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::rotation::{sort_by_offset, sort_lexicographically, RotationEntry};

/// Which ordering to apply to a rotation set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationOrder {
    /// Ascending rotation offset (generation order)
    #[default]
    Offset,
    /// Ascending rotated string
    Lexicographic,
}

impl RotationOrder {
    /// Return a newly ordered copy of `entries`
    #[must_use]
    pub fn apply(self, entries: &[RotationEntry]) -> Vec<RotationEntry> {
        match self {
            Self::Offset => sort_by_offset(entries),
            Self::Lexicographic => sort_lexicographically(entries),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::Lexicographic => "lexicographic",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offset" => Ok(Self::Offset),
            "lexicographic" => Ok(Self::Lexicographic),
            other => bail!("Unknown rotation order '{other}': expected 'offset' or 'lexicographic'"),
        }
    }
}

/// Options for a [`Rotator`](crate::Rotator)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RotatorConfig {
    /// Ordering applied after generation (default: offset)
    #[serde(default)]
    pub order: RotationOrder,
    /// Use terminal colors when rendering tables (default: false)
    #[serde(default)]
    pub color: bool,
}

impl RotatorConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse rotator config")
    }
}
