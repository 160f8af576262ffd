//! Integration tests for the wishlist: saving, listing, and removing
//! products.

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use crate::helpers::{SeedProduct, TestApp};

#[tokio::test]
async fn test_wishlist_requires_authentication() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app.request("GET", "/api/wishlist", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_saving_twice_keeps_a_single_entry() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app
        .seed_product(SeedProduct {
            name: "Silk Pillowcase",
            price: Decimal::new(45000, 2),
            discounted_price: Some(Decimal::new(39000, 2)),
            ..Default::default()
        })
        .await;

    let body = json!({"productId": product_id});
    let response = app
        .request("POST", "/api/wishlist/items", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/wishlist/items", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["productId"], product_id);
    assert_eq!(items[0]["productName"], "Silk Pillowcase");
    assert_eq!(items[0]["discountedPrice"], 390.0);
}

#[tokio::test]
async fn test_saving_unknown_product_is_not_found() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/wishlist/items",
            Some(json!({"productId": 999_999})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Product not found");
}

#[tokio::test]
async fn test_remove_empties_the_wishlist() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (_, token) = app.register("shopper@example.com").await;
    let product_id = app.seed_product(SeedProduct::default()).await;

    let response = app
        .request(
            "POST",
            "/api/wishlist/items",
            Some(json!({"productId": product_id})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/wishlist/items/{}", product_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());

    // Removing again reports the item as gone.
    let response = app
        .request(
            "DELETE",
            &format!("/api/wishlist/items/{}", product_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Wishlist item not found");
}
