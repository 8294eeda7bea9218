//! Topology Module: Persistence Barcodes and Diagrams
//!
//! In-memory model for persistence data read from disk:
//! - `Interval`: a (birth, death) pair with birth <= death
//! - `Barcode`: intervals of one dimension, in file order
//! - `PersistenceDiagram`: intervals of every dimension, tagged
//!
//! ## Mathematical Background
//!
//! Persistent homology tracks the birth and death of topological
//! features (connected components, loops, voids) across a filtration.
//! Each feature contributes one interval; the multiset of intervals of
//! homological dimension k is the k-th barcode.

mod persistence;
mod diagram;

pub use persistence::{Barcode, Interval};
pub use diagram::{DimensionedInterval, PersistenceDiagram};
