//! Order entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::OrderStatus;

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: i64,
    /// Human-facing order reference, e.g. `AYN-20260214-X7K2P9`.
    pub order_number: String,
    /// The ordering user.
    pub user_id: i64,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Sum of line regular prices.
    pub subtotal: Decimal,
    /// Total discount across lines.
    pub discount: Decimal,
    /// Amount actually charged.
    pub total: Decimal,
    /// Recipient name.
    pub shipping_name: String,
    /// Recipient phone number.
    pub shipping_phone: String,
    /// Street address.
    pub shipping_address_line1: String,
    /// Apartment, floor, or landmark.
    pub shipping_address_line2: Option<String>,
    /// City or town.
    pub shipping_city: String,
    /// Free-text note from the customer.
    pub notes: Option<String>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One line of a placed order.
///
/// Name and unit price are snapshots taken at placement time so later
/// catalog edits never rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique line identifier.
    pub id: i64,
    /// The owning order.
    pub order_id: i64,
    /// The ordered product.
    pub product_id: i64,
    /// Product name at placement time.
    pub product_name: String,
    /// Per-unit price charged.
    pub unit_price: Decimal,
    /// Number of units ordered.
    pub quantity: i32,
}

/// Shipping details captured when placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient name.
    pub name: String,
    /// Recipient phone number.
    pub phone: String,
    /// Street address.
    pub address_line1: String,
    /// Apartment, floor, or landmark.
    pub address_line2: Option<String>,
    /// City or town.
    pub city: String,
}
