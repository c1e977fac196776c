use std::path::{Path, PathBuf};
use thiserror::Error;

/// Common error type for color conversion, token sync and palette scans
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid color format: {0} (expected 6 hex digits, optionally prefixed with #)")]
    InvalidColorFormat(String),

    #[error("Could not find a :root block with a --radius declaration in {0}")]
    AnchorNotFound(String),

    #[error("Generated palette block in {0} has a start marker but no end marker")]
    UnterminatedBlock(String),

    #[error("No color families found in {0}")]
    EmptyPalette(String),

    #[error("Failed to read {}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan failed at {}: {message}", .path.display())]
    ScanIo { path: PathBuf, message: String },

    #[error("Pattern error: {0}")]
    InvalidPattern(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ToolError {
    pub fn invalid_color(hex: impl Into<String>) -> Self {
        Self::InvalidColorFormat(hex.into())
    }

    pub fn anchor_not_found(target: impl Into<String>) -> Self {
        Self::AnchorNotFound(target.into())
    }

    pub fn unterminated_block(target: impl Into<String>) -> Self {
        Self::UnterminatedBlock(target.into())
    }

    pub fn source_read(path: &Path, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn destination_write(path: &Path, source: std::io::Error) -> Self {
        Self::DestinationWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn scan_io(path: &Path, message: impl Into<String>) -> Self {
        Self::ScanIo {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn pattern_error(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
