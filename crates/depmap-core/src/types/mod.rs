//! Core type definitions used across the depmap workspace.

pub mod pagination;
pub mod sorting;
pub mod value;

pub use pagination::{Page, Pagination};
pub use sorting::SortDirection;
pub use value::{FieldMap, FieldValue};
