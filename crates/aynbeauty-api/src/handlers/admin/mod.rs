//! Admin-only route handlers.

pub mod dashboard;
pub mod images;
pub mod orders;
pub mod reviews;
