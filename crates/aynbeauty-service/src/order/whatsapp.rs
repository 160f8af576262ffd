//! WhatsApp deep-link generation for order follow-up.
//!
//! The storefront hands customers a `wa.me` link whose message body is a
//! pre-filled order summary, so order confirmation continues over the
//! store's WhatsApp number.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use aynbeauty_core::config::StoreConfig;
use aynbeauty_core::error::AppError;
use aynbeauty_entity::order::{Order, OrderItem};

/// Builds `https://wa.me/...` links with a pre-filled order summary.
#[derive(Debug, Clone)]
pub struct WhatsAppLinkBuilder {
    /// Store WhatsApp number in international format, without `+`.
    number: String,
    /// Store display name used in the greeting.
    store_name: String,
    /// Currency code appended to amounts.
    currency: String,
}

impl WhatsAppLinkBuilder {
    /// Creates a new link builder from store configuration.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            number: config.whatsapp_number.clone(),
            store_name: config.name.clone(),
            currency: config.currency.clone(),
        }
    }

    /// Builds the deep link for one order.
    pub fn order_link(&self, order: &Order, items: &[OrderItem]) -> Result<String, AppError> {
        if self.number.is_empty() {
            return Err(AppError::configuration(
                "Store WhatsApp number is not configured",
            ));
        }

        let message = self.order_message(order, items);
        Ok(format!(
            "https://wa.me/{}?text={}",
            self.number,
            percent_encode(&message)
        ))
    }

    /// The plaintext summary placed in the message body.
    pub fn order_message(&self, order: &Order, items: &[OrderItem]) -> String {
        let mut message = format!(
            "Hello {}! I placed order {}.\n\n",
            self.store_name, order.order_number
        );

        for item in items {
            message.push_str(&format!(
                "{} x {} ({} {})\n",
                item.quantity, item.product_name, item.unit_price, self.currency
            ));
        }

        message.push_str(&format!("\nTotal: {} {}\n", order.total, self.currency));
        message.push_str(&format!("Name: {}", order.shipping_name));

        message
    }
}

/// Percent-encode a message for the `text` query parameter.
fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use aynbeauty_core::config::StoreConfig;
    use aynbeauty_entity::order::{Order, OrderItem, OrderStatus};

    use super::WhatsAppLinkBuilder;

    fn store_config(number: &str) -> StoreConfig {
        StoreConfig {
            name: "AynBeauty".to_string(),
            whatsapp_number: number.to_string(),
            currency: "USD".to_string(),
            low_stock_threshold: 5,
        }
    }

    fn sample_order() -> (Order, Vec<OrderItem>) {
        let now = Utc::now();
        let order = Order {
            id: 1,
            order_number: "AYN-20260214-X7K2P9".to_string(),
            user_id: 7,
            status: OrderStatus::Pending,
            subtotal: Decimal::new(5498, 2),
            discount: Decimal::ZERO,
            total: Decimal::new(5498, 2),
            shipping_name: "Amira Hassan".to_string(),
            shipping_phone: "201001234567".to_string(),
            shipping_address_line1: "12 Nile St".to_string(),
            shipping_address_line2: None,
            shipping_city: "Cairo".to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let items = vec![OrderItem {
            id: 1,
            order_id: 1,
            product_id: 3,
            product_name: "Rose Water Serum".to_string(),
            unit_price: Decimal::new(2749, 2),
            quantity: 2,
        }];
        (order, items)
    }

    #[test]
    fn link_targets_store_number_and_encodes_message() {
        let builder = WhatsAppLinkBuilder::new(&store_config("15551234567"));
        let (order, items) = sample_order();

        let link = builder.order_link(&order, &items).unwrap();
        assert!(link.starts_with("https://wa.me/15551234567?text="));
        // Spaces and newlines must be encoded
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("AYN%2D20260214%2DX7K2P9"));
    }

    #[test]
    fn message_lists_items_and_total() {
        let builder = WhatsAppLinkBuilder::new(&store_config("15551234567"));
        let (order, items) = sample_order();

        let message = builder.order_message(&order, &items);
        assert!(message.contains("order AYN-20260214-X7K2P9"));
        assert!(message.contains("2 x Rose Water Serum (27.49 USD)"));
        assert!(message.contains("Total: 54.98 USD"));
        assert!(message.contains("Name: Amira Hassan"));
    }

    #[test]
    fn missing_number_is_a_configuration_error() {
        let builder = WhatsAppLinkBuilder::new(&store_config(""));
        let (order, items) = sample_order();
        assert!(builder.order_link(&order, &items).is_err());
    }
}
