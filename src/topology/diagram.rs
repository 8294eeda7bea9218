//! Persistence Diagram: Barcodes Across Dimensions
//!
//! A Gudhi-style file lists classes of every homological dimension in
//! one stream. The diagram keeps each class tagged with its dimension
//! and hands out per-dimension barcodes on request.

use super::{Barcode, Interval};

/// An interval tagged with its homological dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionedInterval {
    pub dimension: usize,
    pub interval: Interval,
}

/// Persistence diagram: collection of intervals for each dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    pub intervals: Vec<DimensionedInterval>,
    pub max_dimension: usize,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            max_dimension: 0,
        }
    }

    pub fn add(&mut self, dimension: usize, interval: Interval) {
        if dimension > self.max_dimension {
            self.max_dimension = dimension;
        }
        self.intervals.push(DimensionedInterval { dimension, interval });
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Barcode of dimension d, in insertion order
    pub fn barcode(&self, d: usize) -> Barcode {
        self.intervals.iter()
            .filter(|i| i.dimension == d)
            .map(|i| i.interval)
            .collect()
    }

    /// Dimensions that carry at least one interval, ascending
    pub fn dimensions(&self) -> Vec<usize> {
        let mut dims: Vec<usize> = self.intervals.iter().map(|i| i.dimension).collect();
        dims.sort_unstable();
        dims.dedup();
        dims
    }

    /// Number of intervals in dimension d
    pub fn count(&self, d: usize) -> usize {
        self.intervals.iter().filter(|i| i.dimension == d).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_splits_by_dimension() {
        let mut pd = PersistenceDiagram::new();
        pd.add(0, Interval::new(0.0, 1.0));
        pd.add(1, Interval::new(0.5, 0.7));
        pd.add(0, Interval::new(0.2, 0.4));

        assert_eq!(pd.max_dimension, 1);
        assert_eq!(pd.dimensions(), vec![0, 1]);
        assert_eq!(pd.barcode(0).pairs(), vec![(0.0, 1.0), (0.2, 0.4)]);
        assert_eq!(pd.count(1), 1);
        assert!(pd.barcode(2).is_empty());
    }
}
