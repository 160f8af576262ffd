//! Shopping cart services.

pub mod service;

pub use service::{CartService, CartView};
