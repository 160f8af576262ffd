//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use aynbeauty_core::error::AppError;

/// Runs `validator` checks on a request body.
pub fn validate_body(body: &impl Validate) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password; hashed before storage.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// Password login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// One-time passcode request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpRequest {
    /// Account email the code should be issued for.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// One-time passcode verification body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpVerifyRequest {
    /// Account email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// The 6-digit code.
    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

/// Add-to-cart request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    /// Product to add.
    pub product_id: i64,
    /// Units to add.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Cart quantity update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuantityRequest {
    /// New quantity for the line.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Add-to-wishlist request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemRequest {
    /// Product to save.
    pub product_id: i64,
}

/// Order placement body. Shipping details are snapshotted onto the order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Recipient name.
    #[validate(length(min = 1, message = "Shipping name is required"))]
    pub shipping_name: String,
    /// Contact phone.
    #[validate(length(min = 1, message = "Shipping phone is required"))]
    pub shipping_phone: String,
    /// Street address.
    #[validate(length(min = 1, message = "Shipping address is required"))]
    pub shipping_address_line1: String,
    /// Apartment, floor, or landmark.
    pub shipping_address_line2: Option<String>,
    /// City.
    #[validate(length(min = 1, message = "Shipping city is required"))]
    pub shipping_city: String,
    /// Free-form note to the store.
    pub notes: Option<String>,
}

impl PlaceOrderRequest {
    /// Converts the flat wire shape into the service request.
    pub fn into_service_request(self) -> aynbeauty_service::order::PlaceOrderRequest {
        aynbeauty_service::order::PlaceOrderRequest {
            shipping: aynbeauty_entity::order::ShippingDetails {
                name: self.shipping_name,
                phone: self.shipping_phone,
                address_line1: self.shipping_address_line1,
                address_line2: self.shipping_address_line2,
                city: self.shipping_city,
            },
            notes: self.notes,
        }
    }
}

/// Review submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    /// Optional headline.
    pub title: Option<String>,
    /// Optional review text.
    pub body: Option<String>,
}

/// Admin order status update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    /// Target status name.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Admin review moderation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetApprovalRequest {
    /// Whether the review should be publicly visible.
    pub approved: bool,
}
