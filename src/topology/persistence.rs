//! Persistence Intervals and Barcodes
//!
//! A persistence interval [b, d] represents a topological feature
//! that is "born" at filtration value b and "dies" at value d.
//! A barcode is the ordered list of such intervals for one
//! homological dimension.
//!
//! ## Invariant
//!
//! Every interval satisfies `birth <= death`. The constructor swaps the
//! endpoints when they arrive reversed, so readers never have to.

use std::fmt;

/// A persistence interval [birth, death]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub birth: f64,
    pub death: f64,
}

impl Interval {
    /// Build an interval, swapping the endpoints if `a > b`
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { birth: b, death: a }
        } else {
            Self { birth: a, death: b }
        }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Born and dead at the same filtration value
    pub fn is_degenerate(&self) -> bool {
        self.birth == self.death
    }

    /// Centre of the interval, where its tent function peaks
    pub fn midpoint(&self) -> f64 {
        (self.birth + self.death) / 2.0
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.birth, self.death)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        interval.as_pair()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.birth, self.death)
    }
}

/// Barcode: intervals in insertion (file line) order
///
/// No sorting and no deduplication is ever applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Barcode {
    intervals: Vec<Interval>,
}

impl Barcode {
    pub fn new() -> Self {
        Self { intervals: Vec::new() }
    }

    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The barcode as plain (birth, death) pairs
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.intervals.iter().map(Interval::as_pair).collect()
    }

    /// Total persistence of the finite intervals
    pub fn total_persistence(&self) -> f64 {
        self.intervals.iter()
            .filter(|i| !i.is_essential())
            .map(|i| i.persistence())
            .sum()
    }

    /// Mean persistence of the finite intervals
    pub fn mean_persistence(&self) -> f64 {
        let finite: Vec<_> = self.intervals.iter()
            .filter(|i| !i.is_essential())
            .collect();
        if finite.is_empty() {
            return 0.0;
        }
        finite.iter().map(|i| i.persistence()).sum::<f64>() / finite.len() as f64
    }

    /// Maximum persistence of the finite intervals
    pub fn max_persistence(&self) -> f64 {
        self.intervals.iter()
            .filter(|i| !i.is_essential())
            .map(|i| i.persistence())
            .fold(0.0, f64::max)
    }

    /// Smallest and largest birth value, if any
    pub fn birth_range(&self) -> Option<(f64, f64)> {
        span(self.intervals.iter().map(|i| i.birth))
    }

    /// Smallest and largest death value, if any
    pub fn death_range(&self) -> Option<(f64, f64)> {
        span(self.intervals.iter().map(|i| i.death))
    }
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl FromIterator<Interval> for Barcode {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self { intervals: iter.into_iter().collect() }
    }
}

impl FromIterator<(f64, f64)> for Barcode {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(Interval::from).collect()
    }
}

impl IntoIterator for Barcode {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Barcode {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
