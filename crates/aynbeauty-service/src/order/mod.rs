//! Order placement, history, and WhatsApp handoff.

pub mod number;
pub mod service;
pub mod whatsapp;

pub use number::OrderNumberGenerator;
pub use service::{OrderPage, OrderService, OrderView, PlaceOrderRequest};
pub use whatsapp::WhatsAppLinkBuilder;
