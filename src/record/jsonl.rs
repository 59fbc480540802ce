//! JSONL (JSON Lines) records for rotation sets
//!
//! Each line is one `{"index": .., "permutation": ..}` object.

use anyhow::{Context, Result};

use crate::rotation::RotationEntry;

/// Encode entries as JSON Lines, one entry per line
pub fn to_jsonl(entries: &[RotationEntry]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        let json = serde_json::to_string(entry).with_context(|| {
            format!("Failed to serialize rotation at offset {}", entry.index())
        })?;
        out.push_str(&json);
        out.push('\n');
    }
    Ok(out)
}

/// Decode JSON Lines back into entries, in line order
///
/// # Errors
/// Returns an error naming the 1-based line number if any non-blank line is
/// not a valid entry.
pub fn from_jsonl(content: &str) -> Result<Vec<RotationEntry>> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let entry: RotationEntry = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

        entries.push(entry);
    }

    Ok(entries)
}
