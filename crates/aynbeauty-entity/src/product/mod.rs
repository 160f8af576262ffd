//! Product aggregate: base row, listing card, and images.

pub mod card;
pub mod image;
pub mod model;

pub use card::ProductCard;
pub use image::ProductImage;
pub use model::Product;
