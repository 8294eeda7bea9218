//! Writing barcodes back out in the standard two-column layout

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::with_path;
use crate::error::{BarcodeError, Result};
use crate::topology::Barcode;

/// Emit one `<birth> <death>` line per interval
///
/// Floats use Rust's shortest round-trip formatting, so reading the
/// output back yields the same values.
pub fn write_standard<W: Write>(mut writer: W, barcode: &Barcode) -> Result<()> {
    for interval in barcode {
        writeln!(writer, "{} {}", interval.birth, interval.death)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_standard_file(path: impl AsRef<Path>, barcode: &Barcode) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|source| BarcodeError::Io { path: path.to_path_buf(), source })?;
    write_standard(BufWriter::new(file), barcode).map_err(|e| with_path(e, path))?;
    log::info!("Wrote {} intervals to {}", barcode.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{parse_standard_str, ReadOptions};

    #[test]
    fn test_output_reads_back() {
        let barcode: Barcode = vec![(0.1, 0.3), (2.0, -1.0), (1e-9, 7.25)].into_iter().collect();

        let mut out = Vec::new();
        write_standard(&mut out, &barcode).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("0.1 0.3\n-1 2\n"));
        let parsed = parse_standard_str(&text, &ReadOptions::default()).unwrap();
        assert_eq!(parsed, barcode);
    }
}
