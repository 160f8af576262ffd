//! # aynbeauty-service
//!
//! Business logic service layer for AynBeauty. Each service orchestrates
//! repositories and auth primitives to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod wishlist;

pub use account::{AccountService, LogOtpDelivery, OtpDelivery, OtpService};
pub use admin::{DashboardService, ProductImageService};
pub use cart::CartService;
pub use catalog::CatalogService;
pub use order::{OrderNumberGenerator, OrderService, WhatsAppLinkBuilder};
pub use review::ReviewService;
pub use wishlist::WishlistService;
