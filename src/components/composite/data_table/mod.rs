//! DataTable Component
//!
//! A reusable data table with column definitions and page navigation.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
pub use pagination::Pagination;
