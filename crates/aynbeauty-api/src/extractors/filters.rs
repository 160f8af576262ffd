//! Query-string filter parameter sets for list endpoints.
//!
//! Every value is accepted as a raw string and parsed here, so a bad
//! `minPrice=abc` comes back as a `VALIDATION_ERROR` naming the parameter.
//! Out-of-range values are clamped rather than rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use aynbeauty_core::error::AppError;
use aynbeauty_core::types::{PageRequest, ProductSort};
use aynbeauty_database::query::ProductQuery;
use aynbeauty_entity::order::OrderStatus;

use super::pagination::{build_page_request, non_empty};

/// Catalog filter parameters accepted by `GET /api/products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterParams {
    /// Category slug, matched exactly.
    pub category: Option<String>,
    /// Brand name, matched exactly.
    pub brand: Option<String>,
    /// Free-text term matched against name or description.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    pub max_price: Option<String>,
    /// Minimum average rating (0-5).
    pub rating: Option<String>,
    /// Keep only products with stock on hand.
    pub in_stock: Option<String>,
    /// Keep only discounted products.
    pub on_sale: Option<String>,
    /// Filter by the trending flag.
    pub trending: Option<String>,
    /// Filter by the featured (must-have) flag.
    pub featured: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
    /// Page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
}

impl ProductFilterParams {
    /// Parses the raw parameters into a [`ProductQuery`].
    pub fn into_query(self) -> Result<ProductQuery, AppError> {
        let min_price = match non_empty(self.min_price.as_deref()) {
            Some(raw) => Some(parse_price("minPrice", raw)?),
            None => None,
        };
        let max_price = match non_empty(self.max_price.as_deref()) {
            Some(raw) => Some(parse_price("maxPrice", raw)?),
            None => None,
        };
        let min_rating = match non_empty(self.rating.as_deref()) {
            Some(raw) => Some(parse_rating(raw)?),
            None => None,
        };
        let in_stock = match non_empty(self.in_stock.as_deref()) {
            Some(raw) => parse_bool("inStock", raw)?,
            None => false,
        };
        let on_sale = match non_empty(self.on_sale.as_deref()) {
            Some(raw) => parse_bool("onSale", raw)?,
            None => false,
        };
        let trending = match non_empty(self.trending.as_deref()) {
            Some(raw) => Some(parse_bool("trending", raw)?),
            None => None,
        };
        let featured = match non_empty(self.featured.as_deref()) {
            Some(raw) => Some(parse_bool("featured", raw)?),
            None => None,
        };
        let sort = match non_empty(self.sort.as_deref()) {
            Some(raw) => ProductSort::from_str(raw)?,
            None => ProductSort::default(),
        };
        let page = build_page_request(self.page.as_deref(), self.limit.as_deref())?;

        Ok(ProductQuery {
            category: owned(self.category),
            brand: owned(self.brand),
            search: owned(self.search),
            min_price,
            max_price,
            min_rating,
            in_stock,
            on_sale,
            trending,
            featured,
            sort,
            page,
        })
    }
}

/// Status filter plus pagination for the admin order list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    /// Narrow to one order status.
    pub status: Option<String>,
    /// Page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
}

impl OrderListParams {
    /// Parses into a status filter and a page request.
    pub fn into_parts(self) -> Result<(Option<OrderStatus>, PageRequest), AppError> {
        let status = match non_empty(self.status.as_deref()) {
            Some(raw) => Some(OrderStatus::from_str(raw)?),
            None => None,
        };
        let page = build_page_request(self.page.as_deref(), self.limit.as_deref())?;
        Ok((status, page))
    }
}

fn owned(value: Option<String>) -> Option<String> {
    non_empty(value.as_deref()).map(str::to_string)
}

/// Prices are non-negative by contract; negatives clamp to zero.
fn parse_price(name: &str, raw: &str) -> Result<Decimal, AppError> {
    let value = raw
        .parse::<Decimal>()
        .map_err(|_| AppError::validation(format!("Parameter '{name}' must be a number")))?;
    Ok(value.max(Decimal::ZERO))
}

/// Ratings live on a 0-5 scale; out-of-range values clamp to the scale.
fn parse_rating(raw: &str) -> Result<f64, AppError> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| AppError::validation("Parameter 'rating' must be a number"))?;
    if !value.is_finite() {
        return Err(AppError::validation("Parameter 'rating' must be a number"));
    }
    Ok(value.clamp(0.0, 5.0))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::validation(format!(
            "Parameter '{name}' must be true or false"
        ))),
    }
}
