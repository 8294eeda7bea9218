//! IO Module: Reading Persistence Barcodes from Text Files
//!
//! Two plain-text layouts are understood:
//!
//! ```text
//!  standard            gudhi
//!  ─────────           ─────────────────────────────
//!  # comment           # p  dim  birth  death
//!  0.0 1.5             2    0    0.0    1.5
//!  0.3 0.9             2    1    0.3    inf
//! ```
//!
//! Both readers share one line scanner (`lines`): blank lines and lines
//! whose first character is `#` are skipped, every other line is a
//! record. Records are returned in file order with birth <= death.
//!
//! ## Parse Modes
//!
//! - `ParseMode::Strict` (default): a malformed record is a
//!   `BarcodeError::Parse`; infinite Gudhi classes are recognised by a
//!   birth or death token that parses to an infinite value.
//! - `ParseMode::Lenient`: the historical tolerant behaviour. Values
//!   are read as numeric prefixes; a field with no numeric prefix
//!   becomes 0.0, as does every field after it on the same line, and
//!   any Gudhi line containing the substring `inf` is skipped.
//!
//! Comment and blank lines are recognised on raw bytes, so a comment in
//! a legacy encoding never stops a file from being read.
//!
//! A missing file is always `BarcodeError::FileNotFound`, whichever
//! reader is used.

mod lines;
mod standard;
mod gudhi;
mod writer;

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::error::{BarcodeError, Result};

pub use standard::{parse_standard, parse_standard_str, read_standard_file, read_standard_file_with};
pub use gudhi::{
    parse_gudhi,
    parse_gudhi_str,
    parse_gudhi_diagram,
    read_gudhi_file,
    read_gudhi_file_with,
    read_gudhi_diagram,
};
pub use writer::{write_standard, write_standard_file};

/// How malformed records are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject malformed records with a parse error
    #[default]
    Strict,
    /// Substitute 0.0 for unreadable tokens and keep going
    ///
    /// Values are taken as numeric prefixes (`1.5abc` reads 1.5); the
    /// first field without one, and every later field on the line, read
    /// as 0.0. Unlike the historical reader, whitespace-only lines are
    /// still skipped as blank rather than producing a (0, 0) interval.
    /// Record lines that are not UTF-8 are decoded lossily.
    Lenient,
}

/// Reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    pub mode: ParseMode,
    /// Drop intervals whose birth equals their death
    pub skip_degenerate: bool,
}

impl ReadOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            mode: ParseMode::Lenient,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_skip_degenerate(mut self, skip: bool) -> Self {
        self.skip_degenerate = skip;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.mode == ParseMode::Lenient
    }
}

/// Open a file for line reading, mapping absence to `FileNotFound`
fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::error!("The file {} does not exist", path.display());
            Err(BarcodeError::FileNotFound { path: path.to_path_buf() })
        }
        Err(source) => Err(BarcodeError::Io { path: path.to_path_buf(), source }),
    }
}

/// Attach the file path to stream errors raised while scanning it
fn with_path(err: BarcodeError, path: &Path) -> BarcodeError {
    match err {
        BarcodeError::Stream(source) => BarcodeError::Io { path: path.to_path_buf(), source },
        other => other,
    }
}
