//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod brands;
pub mod cart;
pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod wishlist;
