//! Gudhi-style barcode files
//!
//! Each record describes one persistence class:
//!
//! - a prime p, the class being nontrivial over Z_p (read, not filtered on)
//! - the homological dimension of the class
//! - birth and death of the class; death may be `inf`
//!
//! Infinite classes are skipped. Records are kept only when their
//! dimension matches the requested one, compared as exact f64 equality.

use std::io::BufRead;
use std::path::Path;

use super::lines::{is_infinite_token, ContentLine, ContentLines};
use super::{open, with_path, ParseMode, ReadOptions};
use crate::error::Result;
use crate::topology::{Barcode, Interval, PersistenceDiagram};

/// One finite class read from a Gudhi-style record
struct GudhiClass {
    line: ContentLine,
    dim: f64,
    interval: Interval,
}

/// Read the barcode of `dimension` from a Gudhi-style file
pub fn read_gudhi_file(path: impl AsRef<Path>, dimension: usize) -> Result<Barcode> {
    read_gudhi_file_with(path, dimension, &ReadOptions::default())
}

pub fn read_gudhi_file_with(
    path: impl AsRef<Path>,
    dimension: usize,
    options: &ReadOptions,
) -> Result<Barcode> {
    let path = path.as_ref();
    let reader = open(path)?;
    let barcode = parse_gudhi(reader, dimension, options).map_err(|e| with_path(e, path))?;
    log::info!(
        "Read {} intervals of dimension {} from {}",
        barcode.len(), dimension, path.display()
    );
    Ok(barcode)
}

pub fn parse_gudhi_str(input: &str, dimension: usize, options: &ReadOptions) -> Result<Barcode> {
    parse_gudhi(input.as_bytes(), dimension, options)
}

/// Parse Gudhi-style records from any buffered source, keeping one dimension
pub fn parse_gudhi<R: BufRead>(reader: R, dimension: usize, options: &ReadOptions) -> Result<Barcode> {
    let wanted = dimension as f64;
    let mut barcode = Barcode::new();

    scan(reader, options, |class| {
        if class.dim == wanted {
            barcode.push(class.interval);
        }
        Ok(())
    })?;

    Ok(barcode)
}

/// Read every finite class of every dimension from a Gudhi-style file
pub fn read_gudhi_diagram(path: impl AsRef<Path>, options: &ReadOptions) -> Result<PersistenceDiagram> {
    let path = path.as_ref();
    let reader = open(path)?;
    let diagram = parse_gudhi_diagram(reader, options).map_err(|e| with_path(e, path))?;
    log::info!(
        "Read {} intervals in dimensions {:?} from {}",
        diagram.len(), diagram.dimensions(), path.display()
    );
    Ok(diagram)
}

/// Parse all dimensions at once
///
/// The dimension token must be a non-negative whole number. Strict mode
/// rejects anything else; lenient mode drops the record with a warning.
pub fn parse_gudhi_diagram<R: BufRead>(reader: R, options: &ReadOptions) -> Result<PersistenceDiagram> {
    let mut diagram = PersistenceDiagram::new();

    scan(reader, options, |class| {
        match dimension_index(class.dim) {
            Some(d) => diagram.add(d, class.interval),
            None if options.is_lenient() => {
                log::warn!(
                    "line {}: dimension {} is not a non-negative integer, skipping",
                    class.line.number, class.dim
                );
            }
            None => {
                return Err(class.line.parse_error(format!(
                    "dimension {} is not a non-negative integer",
                    class.dim
                )));
            }
        }
        Ok(())
    })?;

    Ok(diagram)
}

fn dimension_index(dim: f64) -> Option<usize> {
    if dim >= 0.0 && dim.fract() == 0.0 && dim <= usize::MAX as f64 {
        Some(dim as usize)
    } else {
        None
    }
}

/// Does this record describe an infinite class?
///
/// Strict: the birth or death token is an infinite value.
/// Lenient: the text contains `inf` anywhere.
fn is_infinite_class(line: &ContentLine, mode: ParseMode) -> bool {
    match mode {
        ParseMode::Strict => line.tokens().skip(2).take(2).any(is_infinite_token),
        ParseMode::Lenient => line.text.contains("inf"),
    }
}

fn scan<R, F>(reader: R, options: &ReadOptions, mut visit: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(GudhiClass) -> Result<()>,
{
    for line in ContentLines::new(reader, options.mode) {
        let line = line?;

        if is_infinite_class(&line, options.mode) {
            log::debug!("This line: {} contains infinite interval, skipping it", line.text);
            continue;
        }

        let [field, dim, begin, end] =
            line.numbers(["field", "dimension", "birth", "death"], options.mode)?;
        let interval = Interval::new(begin, end);

        if options.skip_degenerate && interval.is_degenerate() {
            log::debug!("line {}: skipping degenerate interval {}", line.number, interval);
            continue;
        }

        log::debug!("Z_{} dim {}: {} , {}", field, dim, interval.birth, interval.death);
        visit(GudhiClass { line, dim, interval })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarcodeError;

    const MIXED: &str = "2 0 1.0 3.0\n2 1 0.5 0.5\n2 0 inf 4.0\n";

    #[test]
    fn test_dimension_filter_and_inf_skip() {
        let barcode = parse_gudhi_str(MIXED, 0, &ReadOptions::default()).unwrap();
        assert_eq!(barcode.pairs(), vec![(1.0, 3.0)]);

        let barcode = parse_gudhi_str(MIXED, 1, &ReadOptions::default()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.5, 0.5)]);
    }

    #[test]
    fn test_swap_applies_before_filter() {
        let barcode = parse_gudhi_str("3 2 0.9 0.1\n", 2, &ReadOptions::default()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.1, 0.9)]);
    }

    #[test]
    fn test_fractional_dimension_never_matches() {
        let barcode = parse_gudhi_str("2 0.5 0 1\n2 0.0 0 2\n", 0, &ReadOptions::default()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.0, 2.0)]);
    }

    #[test]
    fn test_strict_inf_check_is_token_based() {
        let input = "2 0 0 Infinity\n2 0 -inf 1\n2 0 0 1 info\n";
        let barcode = parse_gudhi_str(input, 0, &ReadOptions::strict()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_lenient_inf_check_is_substring() {
        let input = "2 0 0 1 info\n2 0 0 Inf\n";
        let barcode = parse_gudhi_str(input, 0, &ReadOptions::lenient()).unwrap();
        // "Inf" is not matched by the case-sensitive substring; it fails to
        // parse and reads as 0.0.
        assert_eq!(barcode.pairs(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_nan_never_becomes_an_interval() {
        let barcode = parse_gudhi_str("2 0 nan 1\n", 0, &ReadOptions::lenient()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.0, 0.0)]);

        let err = parse_gudhi_str("2 0 nan 1\n", 0, &ReadOptions::strict()).unwrap_err();
        assert!(matches!(err, BarcodeError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_strict_rejects_short_record() {
        let err = parse_gudhi_str("2 0 1.0\n", 0, &ReadOptions::strict()).unwrap_err();
        match err {
            BarcodeError::Parse { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("death"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_short_record_defaults_to_zero() {
        let barcode = parse_gudhi_str("2 0 1.0\n", 0, &ReadOptions::lenient()).unwrap();
        assert_eq!(barcode.pairs(), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_diagram_collects_all_dimensions() {
        let input = "# p dim b d\n2 0 0 1\n2 1 0.2 0.6\n2 2 0.3 inf\n2 1 0.4 0.5\n";
        let pd = parse_gudhi_diagram(input.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(pd.len(), 3);
        assert_eq!(pd.dimensions(), vec![0, 1]);
        assert_eq!(pd.barcode(1).pairs(), vec![(0.2, 0.6), (0.4, 0.5)]);
    }

    #[test]
    fn test_diagram_rejects_fractional_dimension() {
        let err = parse_gudhi_diagram("2 1.5 0 1\n".as_bytes(), &ReadOptions::strict()).unwrap_err();
        assert!(matches!(err, BarcodeError::Parse { line: 1, .. }));

        let pd = parse_gudhi_diagram("2 1.5 0 1\n".as_bytes(), &ReadOptions::lenient()).unwrap();
        assert!(pd.is_empty());
    }
}
