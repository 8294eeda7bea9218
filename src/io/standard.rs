//! Standard two-column barcode files
//!
//! Every record is `<birth> <death>`. Infinite values are not part of
//! this format.

use std::io::BufRead;
use std::path::Path;

use super::lines::ContentLines;
use super::{open, with_path, ReadOptions};
use crate::error::Result;
use crate::topology::{Barcode, Interval};

/// Read a standard barcode file with the default (strict) options
pub fn read_standard_file(path: impl AsRef<Path>) -> Result<Barcode> {
    read_standard_file_with(path, &ReadOptions::default())
}

pub fn read_standard_file_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Barcode> {
    let path = path.as_ref();
    let reader = open(path)?;
    let barcode = parse_standard(reader, options).map_err(|e| with_path(e, path))?;
    log::info!("Read {} intervals from {}", barcode.len(), path.display());
    Ok(barcode)
}

pub fn parse_standard_str(input: &str, options: &ReadOptions) -> Result<Barcode> {
    parse_standard(input.as_bytes(), options)
}

/// Parse standard records from any buffered source
pub fn parse_standard<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Barcode> {
    let mut barcode = Barcode::new();

    for line in ContentLines::new(reader, options.mode) {
        let line = line?;
        let [begin, end] = line.numbers(["birth", "death"], options.mode)?;
        let interval = Interval::new(begin, end);

        if options.skip_degenerate && interval.is_degenerate() {
            log::debug!("line {}: skipping degenerate interval {}", line.number, interval);
            continue;
        }

        log::debug!("{} , {}", interval.birth, interval.death);
        barcode.push(interval);
    }

    Ok(barcode)
}
