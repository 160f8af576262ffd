//! # aynbeauty-entity
//!
//! Domain entity models for the AynBeauty storefront. Every struct in this
//! crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod brand;
pub mod cart;
pub mod category;
pub mod order;
pub mod otp;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;
