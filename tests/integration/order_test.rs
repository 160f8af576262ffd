//! Integration tests for order placement, history, and the WhatsApp handoff.

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::helpers::{SeedProduct, TestApp};

fn shipping_body() -> Value {
    json!({
        "shippingName": "Amira Hassan",
        "shippingPhone": "201001234567",
        "shippingAddressLine1": "12 Nile St",
        "shippingCity": "Cairo",
    })
}

#[tokio::test]
async fn test_place_order_snapshots_prices_and_decrements_stock() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("buyer@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            name: "Discounted Balm",
            price: Decimal::new(2000, 2),
            discounted_price: Some(Decimal::new(1500, 2)),
            stock_quantity: 5,
            ..Default::default()
        })
        .await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 2})),
        Some(&token),
    )
    .await;

    let response = app
        .request("POST", "/api/orders", Some(shipping_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let order = &response.body["data"]["order"];
    assert!(
        order["orderNumber"]
            .as_str()
            .unwrap()
            .starts_with("AYN-")
    );
    assert_eq!(order["status"], "pending");
    assert_eq!(order["subtotal"], 40.0);
    assert_eq!(order["discount"], 10.0);
    assert_eq!(order["total"], 30.0);
    assert_eq!(order["shippingCity"], "Cairo");

    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["productName"], "Discounted Balm");
    assert_eq!(items[0]["unitPrice"], 15.0);
    assert_eq!(items[0]["quantity"], 2);

    assert_eq!(app.stock_of(product_id).await, 3);

    // Placement empties the cart.
    let cart = app.request("GET", "/api/cart", None, Some(&token)).await;
    assert!(cart.body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_cart_order_is_rejected() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("buyer@example.com").await;

    let response = app
        .request("POST", "/api/orders", Some(shipping_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Cannot place an order with an empty cart"
    );
}

#[tokio::test]
async fn test_insufficient_stock_aborts_the_whole_order() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (user_id, token) = app.register("buyer@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            name: "Scarce Serum",
            stock_quantity: 5,
            ..Default::default()
        })
        .await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 1})),
        Some(&token),
    )
    .await;

    // Stock sells out between carting and checkout.
    sqlx::query("UPDATE products SET stock_quantity = 0 WHERE id = $1")
        .bind(product_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to drain stock");

    let response = app
        .request("POST", "/api/orders", Some(shipping_body()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        "Insufficient stock for 'Scarce Serum'"
    );

    let orders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to count orders");
    assert_eq!(orders, 0);

    // The cart is untouched so the buyer can adjust and retry.
    let cart = app.request("GET", "/api/cart", None, Some(&token)).await;
    assert_eq!(cart.body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_customers_cannot_read_foreign_orders() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, owner_token) = app.register("owner@example.com").await;
    let (_, other_token) = app.register("other@example.com").await;
    let (_, admin_token) = app.register_admin("admin@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 1})),
        Some(&owner_token),
    )
    .await;
    let placed = app
        .request(
            "POST",
            "/api/orders",
            Some(shipping_body()),
            Some(&owner_token),
        )
        .await;
    let order_id = placed.body["data"]["order"]["id"].as_i64().unwrap();
    let path = format!("/api/orders/{}", order_id);

    let foreign = app.request("GET", &path, None, Some(&other_token)).await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.body["message"], "Order not found");

    let owner = app.request("GET", &path, None, Some(&owner_token)).await;
    assert_eq!(owner.status, StatusCode::OK);

    let admin = app.request("GET", &path, None, Some(&admin_token)).await;
    assert_eq!(admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_order_history_is_paginated_newest_first() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("buyer@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            stock_quantity: 50,
            ..Default::default()
        })
        .await;

    for _ in 0..3 {
        app.request(
            "POST",
            "/api/cart/items",
            Some(json!({"productId": product_id, "quantity": 1})),
            Some(&token),
        )
        .await;
        let placed = app
            .request("POST", "/api/orders", Some(shipping_body()), Some(&token))
            .await;
        assert_eq!(placed.status, StatusCode::OK);
    }

    let response = app
        .request("GET", "/api/orders?limit=2&page=1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["orders"].as_array().unwrap().len(), 2);
    assert_eq!(data["pagination"]["total"], 3);
    assert_eq!(data["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_whatsapp_link_encodes_the_order_summary() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("buyer@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 1})),
        Some(&token),
    )
    .await;
    let placed = app
        .request("POST", "/api/orders", Some(shipping_body()), Some(&token))
        .await;
    let order_id = placed.body["data"]["order"]["id"].as_i64().unwrap();
    let order_number = placed.body["data"]["order"]["orderNumber"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/orders/{}/whatsapp", order_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let link = response.body["data"]["link"].as_str().unwrap();
    assert!(link.starts_with("https://wa.me/9613123456?text=Hello%20AynBeauty%21"));
    // Everything outside [0-9A-Za-z] is percent-encoded, dashes included.
    assert!(link.contains(&order_number.replace('-', "%2D")));
}
