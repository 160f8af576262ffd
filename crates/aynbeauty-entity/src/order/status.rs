//! Order status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Confirmed by the store.
    Confirmed,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Whether this order still counts toward revenue.
    pub fn counts_toward_revenue(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = aynbeauty_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(aynbeauty_core::AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: pending, confirmed, shipped, delivered, cancelled"
            ))),
        }
    }
}
