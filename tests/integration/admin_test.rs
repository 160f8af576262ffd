//! Integration tests for the admin back office: dashboard, order management,
//! review moderation, and health probes.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{SeedProduct, TestApp};

/// Carts a product and places an order, returning the order id.
async fn place_order(app: &TestApp, token: &str, product_id: i64, quantity: i32) -> i64 {
    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": quantity})),
        Some(token),
    )
    .await;
    let placed = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({
                "shippingName": "Amira Hassan",
                "shippingPhone": "201001234567",
                "shippingAddressLine1": "12 Nile St",
                "shippingCity": "Cairo",
            })),
            Some(token),
        )
        .await;
    assert_eq!(placed.status, StatusCode::OK);
    placed.body["data"]["order"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_dashboard_requires_admin_role() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let anonymous = app.request("GET", "/api/admin/dashboard", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (_, customer_token) = app.register("customer@example.com").await;
    let customer = app
        .request("GET", "/api/admin/dashboard", None, Some(&customer_token))
        .await;
    assert_eq!(customer.status, StatusCode::FORBIDDEN);
    assert_eq!(customer.body["error"], "FORBIDDEN");

    let (_, admin_token) = app.register_admin("admin@example.com").await;
    let admin = app
        .request("GET", "/api/admin/dashboard", None, Some(&admin_token))
        .await;
    assert_eq!(admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_aggregates_sales_and_stock() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, buyer_token) = app.register("buyer@example.com").await;
    let (_, admin_token) = app.register_admin("admin@example.com").await;

    let product_id = app
        .seed_product(SeedProduct {
            name: "Best Seller",
            ..Default::default()
        })
        .await;
    app.seed_product(SeedProduct {
        name: "Nearly Gone",
        stock_quantity: 2,
        ..Default::default()
    })
    .await;

    place_order(&app, &buyer_token, product_id, 2).await;

    let response = app
        .request("GET", "/api/admin/dashboard", None, Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    // Default product price is 10.00, so two units bring 20.00.
    assert_eq!(data["revenueAllTime"], 20.0);
    assert_eq!(data["revenueRecent"], 20.0);
    // The promoted admin does not count as a customer.
    assert_eq!(data["totalCustomers"], 1);
    assert_eq!(data["newCustomers"], 1);

    let by_status = data["ordersByStatus"].as_array().unwrap();
    assert!(
        by_status
            .iter()
            .any(|s| s["status"] == "pending" && s["count"] == 1)
    );

    let top = data["topProducts"].as_array().unwrap();
    assert_eq!(top[0]["productName"], "Best Seller");
    assert_eq!(top[0]["unitsSold"], 2);

    let low = data["lowStockProducts"].as_array().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["name"], "Nearly Gone");
    assert_eq!(low[0]["stockQuantity"], 2);

    let by_day = data["revenueByDay"].as_array().unwrap();
    assert_eq!(by_day.len(), 1);
    assert_eq!(by_day[0]["orderCount"], 1);
}

#[tokio::test]
async fn test_order_status_updates_are_admin_only() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, buyer_token) = app.register("buyer@example.com").await;
    let (_, admin_token) = app.register_admin("admin@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;
    let order_id = place_order(&app, &buyer_token, product_id, 1).await;
    let path = format!("/api/admin/orders/{}/status", order_id);

    let forbidden = app
        .request(
            "PUT",
            &path,
            Some(json!({"status": "confirmed"})),
            Some(&buyer_token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({"status": "confirmed"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "confirmed");

    let invalid = app
        .request(
            "PUT",
            &path,
            Some(json!({"status": "refunded"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_admin_order_list_filters_by_status() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, buyer_token) = app.register("buyer@example.com").await;
    let (_, admin_token) = app.register_admin("admin@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;
    place_order(&app, &buyer_token, product_id, 1).await;

    let pending = app
        .request(
            "GET",
            "/api/admin/orders?status=pending",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    assert_eq!(pending.body["data"]["pagination"]["total"], 1);

    let shipped = app
        .request(
            "GET",
            "/api/admin/orders?status=shipped",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(shipped.body["data"]["pagination"]["total"], 0);

    let forbidden = app
        .request("GET", "/api/admin/orders", None, Some(&buyer_token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reviews_stay_hidden_until_moderated() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, customer_token) = app.register("reviewer@example.com").await;
    let (_, admin_token) = app.register_admin("admin@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;
    let reviews_path = format!("/api/products/{}/reviews", product_id);

    let submitted = app
        .request(
            "POST",
            &reviews_path,
            Some(json!({
                "rating": 5,
                "title": "Love it",
                "body": "Absorbs fast and smells great.",
            })),
            Some(&customer_token),
        )
        .await;
    assert_eq!(submitted.status, StatusCode::OK);
    assert_eq!(submitted.body["data"]["isApproved"], false);
    let review_id = submitted.body["data"]["id"].as_i64().unwrap();

    // Unmoderated reviews are invisible to the storefront.
    let public = app.request("GET", &reviews_path, None, None).await;
    assert!(public.body["data"].as_array().unwrap().is_empty());

    let approved = app
        .request(
            "PUT",
            &format!("/api/admin/reviews/{}/approval", review_id),
            Some(json!({"approved": true})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(approved.body["data"]["isApproved"], true);

    let public = app.request("GET", &reviews_path, None, None).await;
    let reviews = public.body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["authorName"], "Test");

    // One review per product per customer.
    let duplicate = app
        .request(
            "POST",
            &reviews_path,
            Some(json!({"rating": 4})),
            Some(&customer_token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_health_endpoints_report_status() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");

    let response = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["database"], "connected");
}
