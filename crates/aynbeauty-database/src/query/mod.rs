//! Dynamic SQL construction for catalog queries.

pub mod product;

pub use product::{ProductQuery, ProductQueryBuilder};
