//! # TDA-Barcode-IO
//!
//! Readers for persistence barcodes stored as plain text: the pairs of
//! birth/death values produced by persistent homology software.
//!
//! ## Formats
//!
//! 1. **Standard**: one `<birth> <death>` pair per line
//!
//! 2. **Gudhi-style**: `<field> <dimension> <birth> <death>` per line,
//!    where death may be `inf`. Readers select one dimension and skip
//!    infinite classes.
//!
//! In both formats lines starting with `#` are comments and blank lines
//! are ignored. Intervals come back in file order, with the endpoints
//! swapped whenever a record lists death before birth.
//!
//! ## Example
//!
//! ```no_run
//! use tda_barcode_io::{read_gudhi_file, read_standard_file};
//!
//! let h0 = read_standard_file("h0.txt")?;
//! let h1 = read_gudhi_file("diagram.pers", 1)?;
//! println!("{} + {} intervals", h0.len(), h1.len());
//! # Ok::<(), tda_barcode_io::BarcodeError>(())
//! ```
//!
//! ## Errors
//!
//! A missing file is reported as `BarcodeError::FileNotFound` by every
//! reader; the caller decides whether that is fatal. Malformed records
//! are `BarcodeError::Parse` unless `ParseMode::Lenient` is selected.

pub mod error;
pub mod io;
pub mod topology;

// Re-exports from error
pub use error::{BarcodeError, Result};

// Re-exports from topology
pub use topology::{
    Barcode,
    Interval,
    DimensionedInterval,
    PersistenceDiagram,
};

// Re-exports from io
pub use io::{
    // Configuration
    ReadOptions,
    ParseMode,
    // Standard format
    read_standard_file,
    read_standard_file_with,
    parse_standard,
    parse_standard_str,
    // Gudhi format
    read_gudhi_file,
    read_gudhi_file_with,
    parse_gudhi,
    parse_gudhi_str,
    read_gudhi_diagram,
    parse_gudhi_diagram,
    // Output
    write_standard,
    write_standard_file,
};
