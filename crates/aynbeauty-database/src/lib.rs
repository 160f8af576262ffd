//! # aynbeauty-database
//!
//! PostgreSQL connection management, embedded migrations, the product
//! query builder, and concrete repository implementations for all
//! AynBeauty entities.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;

pub use connection::DatabasePool;
