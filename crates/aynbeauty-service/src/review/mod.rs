//! Product review services.

pub mod service;

pub use service::ReviewService;
