//! Error types for barcode reading

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for barcode operations
pub type Result<T> = std::result::Result<T, BarcodeError>;

/// Errors that can occur while reading or writing barcodes
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The input file does not exist
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Any other I/O failure on a file
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on an in-memory or caller-supplied stream
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Malformed content line (strict mode)
    #[error("malformed line {line} ({content:?}): {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Line text, without the line terminator
        content: String,
        /// What was wrong with it
        reason: String,
    },
}

impl BarcodeError {
    /// True when the requested file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, BarcodeError::FileNotFound { .. })
    }
}
