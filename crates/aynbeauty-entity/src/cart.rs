//! Cart entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique cart row identifier.
    pub id: i64,
    /// The cart owner.
    pub user_id: i64,
    /// The product in the cart.
    pub product_id: i64,
    /// Number of units, always positive.
    pub quantity: i32,
    /// When the row was first created.
    pub created_at: DateTime<Utc>,
    /// When the quantity was last changed.
    pub updated_at: DateTime<Utc>,
}

/// A cart row joined with the product fields needed to render and price it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product in the cart.
    pub product_id: i64,
    /// Product display name.
    pub product_name: String,
    /// Regular price.
    pub price: Decimal,
    /// Sale price, when the product is discounted.
    pub discounted_price: Option<Decimal>,
    /// Units currently in stock.
    pub stock_quantity: i32,
    /// URL of the product's primary image, when one exists.
    pub primary_image: Option<String>,
    /// Number of units in the cart.
    pub quantity: i32,
}

impl CartLine {
    /// The per-unit price the buyer pays for this line.
    pub fn unit_price(&self) -> Decimal {
        match self.discounted_price {
            Some(discounted) if discounted < self.price => discounted,
            _ => self.price,
        }
    }

    /// The full regular price of this line.
    pub fn line_subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// The discounted price of this line.
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

/// Totals over a set of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of line regular prices.
    pub subtotal: Decimal,
    /// Amount saved through discounts.
    pub discount: Decimal,
    /// Amount actually payable.
    pub total: Decimal,
    /// Total number of units across all lines.
    pub item_count: i64,
}

impl CartTotals {
    /// Compute totals for the given lines.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let mut subtotal = Decimal::ZERO;
        let mut total = Decimal::ZERO;
        let mut item_count = 0i64;
        for line in lines {
            subtotal += line.line_subtotal();
            total += line.line_total();
            item_count += i64::from(line.quantity);
        }
        Self {
            subtotal,
            discount: subtotal - total,
            total,
            item_count,
        }
    }
}
