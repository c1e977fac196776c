//! Color palette enforcement
//!
//! Walks the component sources and reports color utilities that bypass
//! the design tokens, with file/line/column and the offending line.

mod patterns;
mod types;
mod walker;

pub use patterns::pattern_table;
pub use types::{Advisory, ScanOptions, ScanReport, Violation};
pub use walker::scan;
