//! Generation and placement of the canonical palette block inside the
//! stylesheet's `:root` declaration.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ToolError;
use crate::oklch::{format_oklch, hex_to_oklch};
use crate::palette::Palette;

pub const DEFAULT_PREFIX: &str = "aurora";

pub const START_MARKER: &str = "/* === Canonical Aurora Palette === */";
pub const END_MARKER: &str = "/* === End Canonical Aurora Palette === */";

/// Section that followed the palette before the end marker existed
const LEGACY_BOUNDARY: &str = "/* Aurora-based";

const INDENT: &str = "  ";

lazy_static! {
    static ref ROOT_ANCHOR: Regex = Regex::new(r"(?s):root\s*\{.*?--radius:\s*[^;]+;").expect("Invalid regex pattern");
}

/// Build the delimited block of custom properties for every shade
pub fn generate_variable_block(palette: &Palette, prefix: &str) -> Result<String, ToolError> {
    let mut lines = vec![format!("{INDENT}{START_MARKER}")];

    for family in &palette.families {
        lines.push(format!("{INDENT}/* {} */", family.title()));

        for entry in &family.entries {
            let value = format_oklch(&hex_to_oklch(&entry.hex)?);
            lines.push(format!(
                "{INDENT}--{}-{}-{}: {}; /* {} */",
                prefix,
                family.name,
                entry.level(),
                value,
                entry.hex
            ));
        }

        lines.push(String::new());
    }

    lines.push(format!("{INDENT}{END_MARKER}"));
    Ok(lines.join("\n"))
}

/// Insert `block` after the `--radius` declaration in `:root`, or replace a
/// previously generated block. Everything outside the block is untouched.
pub fn apply_to_stylesheet(existing: &str, block: &str) -> Result<String, ToolError> {
    let anchor = ROOT_ANCHOR
        .find(existing)
        .ok_or_else(|| ToolError::anchor_not_found("stylesheet"))?;

    let Some(marker) = existing.find(START_MARKER) else {
        let mut updated = String::with_capacity(existing.len() + block.len() + 2);
        updated.push_str(&existing[..anchor.end()]);
        updated.push_str("\n\n");
        updated.push_str(block);
        updated.push_str(&existing[anchor.end()..]);
        return Ok(updated);
    };

    let start = line_start(existing, marker);
    let end = block_end(existing, marker)?;

    let mut updated = String::with_capacity(existing.len() - (end - start) + block.len());
    updated.push_str(&existing[..start]);
    updated.push_str(block);
    updated.push_str(&existing[end..]);
    Ok(updated)
}

/// Back up over indentation so the whole marker line is replaced
fn line_start(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let trimmed = before.trim_end_matches([' ', '\t']);
    if trimmed.is_empty() || trimmed.ends_with('\n') {
        trimmed.len()
    } else {
        pos
    }
}

fn block_end(text: &str, marker: usize) -> Result<usize, ToolError> {
    let after = marker + START_MARKER.len();

    if let Some(offset) = text[after..].find(END_MARKER) {
        return Ok(after + offset + END_MARKER.len());
    }

    // Blocks written before the end marker stop at the first newline of the
    // whitespace run ahead of the next Aurora section.
    if let Some(offset) = text[after..].find(LEGACY_BOUNDARY) {
        let boundary = after + offset;
        let content_end = text[..boundary].trim_end().len().max(after);
        if let Some(newline) = text[content_end..boundary].find('\n') {
            return Ok(content_end + newline);
        }
    }

    Err(ToolError::unterminated_block("stylesheet"))
}
