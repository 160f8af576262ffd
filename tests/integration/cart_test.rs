//! Integration tests for the shopping cart: adding, updating, totals,
//! and clearing.

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use crate::helpers::{SeedProduct, TestApp};

#[tokio::test]
async fn test_cart_requires_authentication() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app.request("GET", "/api/cart", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_add_to_cart_merges_quantities() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    let body = |quantity: i32| json!({"productId": product_id, "quantity": quantity});
    let response = app
        .request("POST", "/api/cart/items", Some(body(2)), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/cart/items", Some(body(1)), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let items = &response.body["data"]["items"];
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["productId"], product_id);
    assert_eq!(items[0]["quantity"], 3);
}

#[tokio::test]
async fn test_adding_out_of_stock_product_conflicts() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            name: "Sold Out Mask",
            stock_quantity: 0,
            ..Default::default()
        })
        .await;

    let response = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"productId": product_id, "quantity": 1})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "'Sold Out Mask' is out of stock");
}

#[tokio::test]
async fn test_adding_unknown_product_is_not_found() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"productId": 999999, "quantity": 1})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_quantity_and_remove_line() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 1})),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/cart/items/{}", product_id),
            Some(json!({"quantity": 5})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["items"][0]["quantity"], 5);

    let response = app
        .request(
            "DELETE",
            &format!("/api/cart/items/{}", product_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());

    // Removing an absent line is an error, not a no-op.
    let response = app
        .request(
            "DELETE",
            &format!("/api/cart/items/{}", product_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_totals_use_discounted_prices() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            name: "Discounted Balm",
            price: Decimal::new(2000, 2),
            discounted_price: Some(Decimal::new(1500, 2)),
            ..Default::default()
        })
        .await;

    let response = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"productId": product_id, "quantity": 2})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let totals = &response.body["data"]["totals"];
    assert_eq!(totals["subtotal"], 40.0);
    assert_eq!(totals["discount"], 10.0);
    assert_eq!(totals["total"], 30.0);
    assert_eq!(totals["itemCount"], 2);
}

#[tokio::test]
async fn test_clear_cart_removes_everything() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"productId": product_id, "quantity": 2})),
        Some(&token),
    )
    .await;

    let response = app.request("DELETE", "/api/cart", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Cart cleared");

    let response = app.request("GET", "/api/cart", None, Some(&token)).await;
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["data"]["totals"]["itemCount"], 0);
}
