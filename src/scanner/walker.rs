//! Directory walk and per-file checks

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::patterns::{advise, find_violations, ForbiddenPattern};
use super::types::{ScanOptions, ScanReport};
use crate::error::ToolError;

/// Walks the scan root and checks every included file
pub struct Scanner {
    options: ScanOptions,
    include: Vec<Pattern>,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Result<Self, ToolError> {
        let include = options
            .include
            .iter()
            .map(|p| Pattern::new(p).map_err(|e| ToolError::pattern_error(format!("{}: {}", p, e))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { options, include })
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.options.root).unwrap_or(path);
        let relative = relative.to_string_lossy();
        self.options
            .skip
            .iter()
            .any(|skip| relative.contains(skip.as_str()))
    }

    fn is_included(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.include.iter().any(|p| p.matches(&name))
    }

    /// Files to check, in file-name order within each directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ToolError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.options.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_skipped(e.path()));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.options.root.as_path()).to_path_buf();
                ToolError::scan_io(&path, e.to_string())
            })?;

            if entry.file_type().is_file() && self.is_included(&entry) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Check every file against `patterns`. Invalid UTF-8 is decoded lossily;
    /// a file that cannot be read at all aborts the scan.
    pub fn scan(&self, patterns: &[ForbiddenPattern]) -> Result<ScanReport, ToolError> {
        let files = self.collect_files()?;
        let mut report = ScanReport {
            files_checked: files.len(),
            ..Default::default()
        };

        for file in &files {
            let bytes = fs::read(file).map_err(|e| ToolError::scan_io(file, e.to_string()))?;
            let content = String::from_utf8_lossy(&bytes);

            let violations = find_violations(&content, file, patterns);
            if !violations.is_empty() {
                debug!(file = %file.display(), count = violations.len(), "color violations");
            }
            report.violations.extend(violations);
            report.advisories.extend(advise(&content, file));
        }

        info!(
            root = %self.options.root.display(),
            files = report.files_checked,
            violations = report.violations.len(),
            "palette scan finished"
        );
        Ok(report)
    }
}

/// Scan `options.root` with the given pattern table
pub fn scan(options: ScanOptions, patterns: &[ForbiddenPattern]) -> Result<ScanReport, ToolError> {
    Scanner::new(options)?.scan(patterns)
}
