//! # aynbeauty-api
//!
//! HTTP API layer for AynBeauty built on Axum.
//!
//! Provides the storefront and back-office REST endpoints, middleware
//! (auth, RBAC, CORS, logging), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
