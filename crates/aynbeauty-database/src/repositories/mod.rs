//! Concrete repository implementations, one per aggregate.

pub mod analytics;
pub mod brand;
pub mod cart;
pub mod category;
pub mod order;
pub mod otp;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;

pub use analytics::AnalyticsRepository;
pub use brand::BrandRepository;
pub use cart::CartRepository;
pub use category::CategoryRepository;
pub use order::OrderRepository;
pub use otp::OtpRepository;
pub use product::ProductRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;
