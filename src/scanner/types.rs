//! Scanner types

use serde::Serialize;
use std::path::PathBuf;

use crate::config::ScanSettings;

/// What to scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// File name globs to include (e.g. "*.tsx")
    pub include: Vec<String>,
    /// Path fragments that exclude a file, matched against the path below root
    pub skip: Vec<String>,
}

impl From<&ScanSettings> for ScanOptions {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            root: settings.root.clone(),
            include: settings.include.clone(),
            skip: settings.skip.clone(),
        }
    }
}

/// A forbidden color usage with its source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub file: PathBuf,
    /// 1-based
    pub line: usize,
    /// 1-based, in characters
    pub column: usize,
    #[serde(rename = "match")]
    pub matched: String,
    pub description: String,
    /// The trimmed source line
    pub context: String,
}

/// A non-blocking suggestion to prefer a semantic token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub file: PathBuf,
    pub line: usize,
    pub usage: &'static str,
    pub suggestion: &'static str,
}

/// Result of a scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files_checked: usize,
    pub violations: Vec<Violation>,
    pub advisories: Vec<Advisory>,
}

impl ScanReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
