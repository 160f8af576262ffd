//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// Storefront identity and merchandising configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name of the store, used in generated order messages.
    #[serde(default = "default_name")]
    pub name: String,
    /// WhatsApp number that receives order confirmations, in international
    /// format without the leading `+` (e.g. `9613123456`).
    #[serde(default)]
    pub whatsapp_number: String,
    /// Currency code shown in order messages.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Stock level at or below which a product counts as low stock
    /// on the admin dashboard.
    #[serde(default = "default_low_stock")]
    pub low_stock_threshold: i32,
}

fn default_name() -> String {
    "AynBeauty".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_low_stock() -> i32 {
    5
}
