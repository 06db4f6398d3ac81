//! Composite Components
//!
//! Components assembled from primitives.

pub mod data_table;
