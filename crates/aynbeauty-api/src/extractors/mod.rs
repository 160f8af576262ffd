//! Custom Axum extractors.

pub mod auth;
pub mod filters;
pub mod pagination;

pub use auth::AuthUser;
pub use filters::{OrderListParams, ProductFilterParams};
pub use pagination::PaginationParams;
