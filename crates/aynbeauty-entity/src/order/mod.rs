//! Order aggregate: order row, line items, and status enum.

pub mod model;
pub mod status;

pub use model::{Order, OrderItem, ShippingDetails};
pub use status::OrderStatus;
