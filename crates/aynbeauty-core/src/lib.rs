//! # aynbeauty-core
//!
//! Core crate for the AynBeauty storefront server. Contains configuration
//! schemas, pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AynBeauty crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
