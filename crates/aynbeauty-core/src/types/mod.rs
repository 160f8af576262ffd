//! Shared domain-neutral types.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageRequest, Pagination};
pub use sorting::ProductSort;
