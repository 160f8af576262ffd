//! Back-office services — sales analytics and product image management.

pub mod dashboard;
pub mod images;

pub use dashboard::{DashboardReport, DashboardService};
pub use images::ProductImageService;
