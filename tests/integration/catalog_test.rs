//! Integration tests for catalog browsing: listing, filtering, pagination,
//! and product detail.

use http::StatusCode;
use rust_decimal::Decimal;

use crate::helpers::{SeedProduct, TestApp};

#[tokio::test]
async fn test_listing_sorts_and_paginates() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    for (name, cents) in [
        ("Day Cream", 10000),
        ("Night Cream", 20000),
        ("Eye Cream", 30000),
    ] {
        app.seed_product(SeedProduct {
            name,
            price: Decimal::new(cents, 2),
            ..Default::default()
        })
        .await;
    }

    let response = app
        .request(
            "GET",
            "/api/products?sort=price-high&limit=2&page=1",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Eye Cream");
    assert_eq!(products[1]["name"], "Night Cream");
    assert_eq!(response.body["pagination"]["page"], 1);
    assert_eq!(response.body["pagination"]["limit"], 2);
    assert_eq!(response.body["pagination"]["total"], 3);
    assert_eq!(response.body["pagination"]["totalPages"], 2);

    let response = app
        .request(
            "GET",
            "/api/products?sort=price-high&limit=2&page=2",
            None,
            None,
        )
        .await;

    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Day Cream");

    // A page past the end is an empty list, not an error.
    let response = app
        .request(
            "GET",
            "/api/products?sort=price-high&limit=2&page=3",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["products"].as_array().unwrap();
    assert!(products.is_empty());
    assert_eq!(response.body["pagination"]["total"], 3);
}

#[tokio::test]
async fn test_search_matches_names_case_insensitively() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    app.seed_product(SeedProduct {
        name: "Vitamin C Serum",
        ..Default::default()
    })
    .await;
    app.seed_product(SeedProduct {
        name: "Rose Water Toner",
        ..Default::default()
    })
    .await;

    let response = app
        .request("GET", "/api/products?search=sErUm", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Vitamin C Serum");
    assert_eq!(response.body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_category_filter_with_unknown_brand_matches_nothing() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let skincare = app.seed_category("Skincare", "skincare").await;
    let brand = app.seed_brand("Lumina", "lumina").await;
    app.seed_product(SeedProduct {
        name: "Hydrating Mist",
        category_id: Some(skincare),
        brand_id: Some(brand),
        ..Default::default()
    })
    .await;

    let response = app
        .request("GET", "/api/products?category=skincare", None, None)
        .await;
    assert_eq!(response.body["pagination"]["total"], 1);

    let response = app
        .request(
            "GET",
            "/api/products?category=skincare&brand=Nonexistent",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["products"].as_array().unwrap().is_empty());
    assert_eq!(response.body["pagination"]["total"], 0);
    assert_eq!(response.body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_stock_and_sale_filters_narrow_results() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    app.seed_product(SeedProduct {
        name: "Discounted Balm",
        price: Decimal::new(2000, 2),
        discounted_price: Some(Decimal::new(1500, 2)),
        stock_quantity: 5,
        ..Default::default()
    })
    .await;
    app.seed_product(SeedProduct {
        name: "Sold Out Mask",
        price: Decimal::new(1000, 2),
        stock_quantity: 0,
        ..Default::default()
    })
    .await;

    let response = app
        .request("GET", "/api/products?onSale=true", None, None)
        .await;
    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Discounted Balm");

    let response = app
        .request("GET", "/api/products?inStock=true", None, None)
        .await;
    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Discounted Balm");

    // An explicit false is accepted and does not narrow anything.
    let response = app
        .request("GET", "/api/products?inStock=false", None, None)
        .await;
    assert_eq!(response.body["pagination"]["total"], 2);
}

#[tokio::test]
async fn test_rating_filter_counts_only_approved_reviews() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (user_id, _) = app.register("reviewer@example.com").await;
    let rated = app
        .seed_product(SeedProduct {
            name: "Rated Serum",
            ..Default::default()
        })
        .await;
    let unrated = app
        .seed_product(SeedProduct {
            name: "Pending Serum",
            ..Default::default()
        })
        .await;

    app.seed_review(rated, user_id, 5, true).await;
    app.seed_review(unrated, user_id, 5, false).await;

    let response = app
        .request("GET", "/api/products?rating=4", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Rated Serum");
    assert_eq!(products[0]["averageRating"], 5.0);
    assert_eq!(products[0]["reviewCount"], 1);
    assert_eq!(response.body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_malformed_filter_parameters_are_rejected() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .request("GET", "/api/products?minPrice=abc", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("minPrice")
    );

    let response = app
        .request("GET", "/api/products?sort=cheapest", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/products?trending=maybe", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_detail_includes_images_and_reviews() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let product_id = app
        .seed_product(SeedProduct {
            name: "Glow Oil",
            ..Default::default()
        })
        .await;
    sqlx::query(
        "INSERT INTO product_images (product_id, image_url, is_primary) VALUES ($1, $2, TRUE)",
    )
    .bind(product_id)
    .bind("/uploads/products/glow-oil.jpg")
    .execute(&app.db_pool)
    .await
    .expect("Failed to seed image");

    let response = app
        .request("GET", &format!("/api/products/{}", product_id), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["product"]["name"], "Glow Oil");
    assert_eq!(
        data["product"]["primaryImage"],
        "/uploads/products/glow-oil.jpg"
    );
    assert_eq!(data["images"].as_array().unwrap().len(), 1);
    assert!(data["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_product_returns_not_found() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .request("GET", "/api/products/999999", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_category_and_brand_menus_count_products() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let skincare = app.seed_category("Skincare", "skincare").await;
    let brand = app.seed_brand("Lumina", "lumina").await;
    sqlx::query("INSERT INTO categories (name, slug, is_active) VALUES ('Hidden', 'hidden', FALSE)")
        .execute(&app.db_pool)
        .await
        .expect("Failed to seed inactive category");

    for name in ["Mist", "Toner"] {
        app.seed_product(SeedProduct {
            name,
            category_id: Some(skincare),
            brand_id: Some(brand),
            ..Default::default()
        })
        .await;
    }

    let response = app.request("GET", "/api/categories", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let categories = response.body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["slug"], "skincare");
    assert_eq!(categories[0]["productCount"], 2);

    let response = app.request("GET", "/api/brands", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let brands = response.body["data"].as_array().unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0]["name"], "Lumina");
    assert_eq!(brands[0]["productCount"], 2);
}
