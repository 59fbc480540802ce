//! Text rendering of rotation tables
//!
//! Renders entries as aligned `index  rotation` lines. Output is returned as
//! a `String` so callers decide where it goes.

use std::fmt::Write as _;

use colored::Colorize;

use crate::rotation::RotationEntry;

/// Render entries one per line, offsets right-aligned.
///
/// With `color`, offsets are dimmed and the offset-0 row (the base string)
/// is bold.
#[must_use]
pub fn render_table(entries: &[RotationEntry], color: bool) -> String {
    let width = entries
        .iter()
        .map(|e| e.index().to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for entry in entries {
        let index = format!("{:>width$}", entry.index());
        if color {
            let rotation = if entry.index() == 0 {
                entry.rotation().bold().to_string()
            } else {
                entry.rotation().to_string()
            };
            let _ = writeln!(out, "{}  {rotation}", index.as_str().dimmed());
        } else {
            let _ = writeln!(out, "{index}  {}", entry.rotation());
        }
    }
    out
}
