//! Order placement and history.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use aynbeauty_core::error::AppError;
use aynbeauty_core::types::{PageRequest, Pagination};
use aynbeauty_database::repositories::order::OrderRepository;
use aynbeauty_entity::order::{Order, OrderItem, OrderStatus, ShippingDetails};

use super::number::OrderNumberGenerator;
use super::whatsapp::WhatsAppLinkBuilder;

/// Data for placing an order from the caller's cart.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlaceOrderRequest {
    /// Where to ship the order.
    pub shipping: ShippingDetails,
    /// Free-text note from the customer.
    pub notes: Option<String>,
}

/// An order together with its line items.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrderView {
    /// The order row.
    pub order: Order,
    /// Snapshotted line items.
    pub items: Vec<OrderItem>,
}

/// A page of orders with its pagination envelope.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrderPage {
    /// Orders for the requested page, newest first.
    pub orders: Vec<Order>,
    /// Page metadata.
    pub pagination: Pagination,
}

/// Handles order placement, history, and the WhatsApp handoff.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// Order repository.
    order_repo: Arc<OrderRepository>,
    /// Order number generator.
    number_generator: OrderNumberGenerator,
    /// WhatsApp link builder.
    whatsapp: WhatsAppLinkBuilder,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(order_repo: Arc<OrderRepository>, whatsapp: WhatsAppLinkBuilder) -> Self {
        Self {
            order_repo,
            number_generator: OrderNumberGenerator::new(),
            whatsapp,
        }
    }

    /// Places an order from the caller's cart.
    pub async fn place(&self, user_id: i64, req: PlaceOrderRequest) -> Result<OrderView, AppError> {
        validate_shipping(&req.shipping)?;

        let order_number = self.number_generator.generate(Utc::now());
        let notes = req.notes.as_deref().filter(|n| !n.trim().is_empty());

        let (order, items) = self
            .order_repo
            .place(user_id, &order_number, &req.shipping, notes)
            .await?;

        info!(
            user_id,
            order_id = order.id,
            order_number = %order.order_number,
            total = %order.total,
            "Order placed"
        );

        Ok(OrderView { order, items })
    }

    /// The caller's orders, newest first.
    pub async fn my_orders(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<OrderPage, AppError> {
        let (orders, total) = self.order_repo.list_for_user(user_id, &page).await?;
        let pagination = Pagination::new(page, total);
        Ok(OrderPage { orders, pagination })
    }

    /// Loads one order with items. Customers only see their own orders;
    /// a foreign order id reads as absent rather than forbidden.
    pub async fn get(
        &self,
        user_id: i64,
        is_admin: bool,
        order_id: i64,
    ) -> Result<OrderView, AppError> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        if order.user_id != user_id && !is_admin {
            return Err(AppError::not_found("Order not found"));
        }

        let items = self.order_repo.list_items(order_id).await?;
        Ok(OrderView { order, items })
    }

    /// Builds the WhatsApp follow-up link for one order.
    pub async fn whatsapp_link(
        &self,
        user_id: i64,
        is_admin: bool,
        order_id: i64,
    ) -> Result<String, AppError> {
        let view = self.get(user_id, is_admin, order_id).await?;
        self.whatsapp.order_link(&view.order, &view.items)
    }

    /// All orders, optionally narrowed to one status (admin).
    pub async fn list_all(
        &self,
        status: Option<OrderStatus>,
        page: PageRequest,
    ) -> Result<OrderPage, AppError> {
        let (orders, total) = self.order_repo.list_all(status, &page).await?;
        let pagination = Pagination::new(page, total);
        Ok(OrderPage { orders, pagination })
    }

    /// Moves an order to a new status (admin).
    pub async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let order = self.order_repo.update_status(order_id, status).await?;
        info!(order_id, status = %status, "Order status updated");
        Ok(order)
    }
}

/// Rejects blank shipping fields before touching the database.
fn validate_shipping(shipping: &ShippingDetails) -> Result<(), AppError> {
    if shipping.name.trim().is_empty() {
        return Err(AppError::validation("Shipping name is required"));
    }
    if shipping.phone.trim().is_empty() {
        return Err(AppError::validation("Shipping phone is required"));
    }
    if shipping.address_line1.trim().is_empty() {
        return Err(AppError::validation("Shipping address is required"));
    }
    if shipping.city.trim().is_empty() {
        return Err(AppError::validation("Shipping city is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use aynbeauty_entity::order::ShippingDetails;

    use super::validate_shipping;

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            name: "Amira Hassan".to_string(),
            phone: "201001234567".to_string(),
            address_line1: "12 Nile St".to_string(),
            address_line2: None,
            city: "Cairo".to_string(),
        }
    }

    #[test]
    fn complete_shipping_details_pass() {
        assert!(validate_shipping(&shipping()).is_ok());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut s = shipping();
        s.name = "  ".to_string();
        assert!(validate_shipping(&s).is_err());

        let mut s = shipping();
        s.phone = String::new();
        assert!(validate_shipping(&s).is_err());

        let mut s = shipping();
        s.address_line1 = String::new();
        assert!(validate_shipping(&s).is_err());

        let mut s = shipping();
        s.city = String::new();
        assert!(validate_shipping(&s).is_err());
    }
}
