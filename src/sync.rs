//! End-to-end token sync: colors.yml → generated block → stylesheet

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::diff::StylesheetDiff;
use crate::error::ToolError;
use crate::palette::parse_color_definitions;
use crate::stylesheet::{apply_to_stylesheet, generate_variable_block};

/// Number of generated lines echoed back as a sample
const SAMPLE_LINES: usize = 10;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub source: PathBuf,
    pub stylesheet: PathBuf,
    pub prefix: String,
    /// Compute the result without touching the stylesheet
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub families: usize,
    pub variables: usize,
    /// Whether the stylesheet content differs from the generated result
    pub changed: bool,
    /// Whether the stylesheet was rewritten
    pub written: bool,
    pub sample: Vec<String>,
    pub diff: StylesheetDiff,
}

fn read(path: &Path) -> Result<String, ToolError> {
    fs::read_to_string(path).map_err(|e| ToolError::source_read(path, e))
}

/// Run a sync. The stylesheet is read whole, transformed in memory and
/// written back in one call, so a failure leaves it untouched.
pub fn sync(options: &SyncOptions) -> Result<SyncReport, ToolError> {
    let definitions = read(&options.source)?;
    let palette = parse_color_definitions(&definitions);
    if palette.is_empty() {
        return Err(ToolError::EmptyPalette(options.source.display().to_string()));
    }
    info!(
        families = palette.families.len(),
        shades = palette.entry_count(),
        "parsed color definitions"
    );

    let block = generate_variable_block(&palette, &options.prefix)?;

    let current = read(&options.stylesheet)?;
    let updated = apply_to_stylesheet(&current, &block).map_err(|e| match e {
        ToolError::AnchorNotFound(_) => {
            ToolError::anchor_not_found(options.stylesheet.display().to_string())
        }
        ToolError::UnterminatedBlock(_) => {
            ToolError::unterminated_block(options.stylesheet.display().to_string())
        }
        other => other,
    })?;

    let changed = updated != current;
    let diff = StylesheetDiff::between(&current, &updated);

    let written = changed && !options.dry_run;
    if written {
        fs::write(&options.stylesheet, &updated)
            .map_err(|e| ToolError::destination_write(&options.stylesheet, e))?;
        info!(path = %options.stylesheet.display(), changes = %diff.summary(), "stylesheet updated");
    } else {
        debug!(changed, dry_run = options.dry_run, "stylesheet left as is");
    }

    Ok(SyncReport {
        families: palette.families.len(),
        variables: palette.entry_count(),
        changed,
        written,
        sample: block.lines().take(SAMPLE_LINES).map(String::from).collect(),
        diff,
    })
}
