//! Members Feature
//!
//! Searchable, paginated member table with inline edit and bulk delete.

pub mod controller;
pub mod page;
