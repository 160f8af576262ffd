//! Catalog browsing — filtered product listings, product detail, categories, brands.

use std::sync::Arc;

use aynbeauty_core::error::AppError;
use aynbeauty_core::types::Pagination;
use aynbeauty_database::query::ProductQuery;
use aynbeauty_database::repositories::brand::BrandRepository;
use aynbeauty_database::repositories::category::CategoryRepository;
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_database::repositories::review::ReviewRepository;
use aynbeauty_entity::brand::BrandWithCount;
use aynbeauty_entity::category::CategoryWithCount;
use aynbeauty_entity::product::{ProductCard, ProductImage};
use aynbeauty_entity::review::ReviewWithAuthor;

/// A page of product cards with its pagination envelope.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProductPage {
    /// The matching products for the requested page.
    pub products: Vec<ProductCard>,
    /// Page metadata computed from the total match count.
    pub pagination: Pagination,
}

/// A single product with its gallery and approved reviews.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProductDetail {
    /// The product card (aggregated rating and review count included).
    pub product: ProductCard,
    /// All images, primary first.
    pub images: Vec<ProductImage>,
    /// Approved reviews, newest first.
    pub reviews: Vec<ReviewWithAuthor>,
}

/// Read-side catalog operations for the storefront.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Product repository.
    product_repo: Arc<ProductRepository>,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Brand repository.
    brand_repo: Arc<BrandRepository>,
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        product_repo: Arc<ProductRepository>,
        category_repo: Arc<CategoryRepository>,
        brand_repo: Arc<BrandRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
            brand_repo,
            review_repo,
        }
    }

    /// Runs a filtered, sorted, paginated product search.
    pub async fn list_products(&self, query: ProductQuery) -> Result<ProductPage, AppError> {
        let (products, total) = self.product_repo.search(&query).await?;
        let pagination = Pagination::new(query.page, total);
        Ok(ProductPage {
            products,
            pagination,
        })
    }

    /// Loads one product with its images and approved reviews.
    pub async fn product_detail(&self, product_id: i64) -> Result<ProductDetail, AppError> {
        let product = self
            .product_repo
            .find_card(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        let images = self.product_repo.list_images(product_id).await?;
        let reviews = self
            .review_repo
            .list_approved_for_product(product_id)
            .await?;

        Ok(ProductDetail {
            product,
            images,
            reviews,
        })
    }

    /// Active categories with product counts, in merchandising order.
    pub async fn list_categories(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        self.category_repo.list_active_with_counts().await
    }

    /// Active brands with product counts, featured first.
    pub async fn list_brands(&self) -> Result<Vec<BrandWithCount>, AppError> {
        self.brand_repo.list_active_with_counts().await
    }

    /// Approved reviews for a product, newest first. 404 when the
    /// product itself does not exist.
    pub async fn list_reviews(&self, product_id: i64) -> Result<Vec<ReviewWithAuthor>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        self.review_repo.list_approved_for_product(product_id).await
    }
}
