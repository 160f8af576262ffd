//! Storefront catalog services — product browsing, categories, brands.

pub mod service;

pub use service::{CatalogService, ProductDetail, ProductPage};
