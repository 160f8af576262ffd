//! Product listing query builder.
//!
//! Renders an open bag of optional catalog filters into two SQL programs:
//! a page query returning [`ProductCard`] rows and a count query returning
//! the total number of matching products. Both are produced from the same
//! predicate-accumulation code path so the reported total always matches
//! the true filtered set size.
//!
//! The rating filter is applied after aggregation (HAVING over the average
//! of approved reviews), so the count query groups first and counts the
//! surviving groups in a subquery. Every dynamic value is a bound
//! parameter; nothing from the request is interpolated into the SQL text.

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use aynbeauty_core::types::{PageRequest, ProductSort};

/// Columns selected for one listing row, aggregated per product.
const CARD_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.discounted_price, \
     p.stock_quantity, p.is_trending, p.is_must_have, p.is_new_arrival, \
     c.name AS category_name, c.slug AS category_slug, \
     COALESCE(b.name, 'Unknown') AS brand_name, \
     COALESCE(AVG(r.rating), 0)::float8 AS average_rating, \
     COUNT(r.id) AS review_count, \
     (SELECT pi.image_url FROM product_images pi WHERE pi.product_id = p.id \
      ORDER BY pi.is_primary DESC, pi.sort_order ASC LIMIT 1) AS primary_image, \
     p.created_at, p.updated_at";

/// Join clause shared by the page and count queries. Only approved reviews
/// participate in rating aggregates.
const BASE_JOINS: &str = " FROM products p \
     LEFT JOIN categories c ON c.id = p.category_id \
     LEFT JOIN brands b ON b.id = p.brand_id \
     LEFT JOIN reviews r ON r.product_id = p.id AND r.is_approved = TRUE";

/// Parsed catalog filter parameters for one listing request.
///
/// `in_stock` and `on_sale` only narrow the result when `true`;
/// `trending` and `featured` filter by flag equality whenever present.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Category slug, matched exactly.
    pub category: Option<String>,
    /// Brand name, matched exactly.
    pub brand: Option<String>,
    /// Free-text term, substring-matched against name or description.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Minimum average rating over approved reviews.
    pub min_rating: Option<f64>,
    /// Keep only products with stock on hand.
    pub in_stock: bool,
    /// Keep only products sold below their regular price.
    pub on_sale: bool,
    /// Filter by the trending flag.
    pub trending: Option<bool>,
    /// Filter by the must-have (featured) flag.
    pub featured: Option<bool>,
    /// Sort order for the page query.
    pub sort: ProductSort,
    /// Page number and size.
    pub page: PageRequest,
}

/// Renders a [`ProductQuery`] into executable SQL.
#[derive(Debug, Clone)]
pub struct ProductQueryBuilder {
    query: ProductQuery,
}

impl ProductQueryBuilder {
    /// Create a builder for the given filter set.
    pub fn new(query: ProductQuery) -> Self {
        Self { query }
    }

    /// The query returning one page of [`ProductCard`] rows.
    ///
    /// [`ProductCard`]: aynbeauty_entity::product::ProductCard
    pub fn page_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(CARD_COLUMNS);
        builder.push(BASE_JOINS);
        self.push_predicates(&mut builder);
        builder.push(" GROUP BY p.id, c.name, c.slug, b.name");
        self.push_group_having(&mut builder);
        self.push_order_by(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(self.query.page.limit);
        builder.push(" OFFSET ");
        builder.push_bind(self.query.page.offset());
        builder
    }

    /// The single-product variant of the page query, for detail pages.
    /// Same projection and joins, filtered to one id.
    pub fn detail_query(product_id: i64) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(CARD_COLUMNS);
        builder.push(BASE_JOINS);
        builder.push(" WHERE p.id = ");
        builder.push_bind(product_id);
        builder.push(" GROUP BY p.id, c.name, c.slug, b.name");
        builder
    }

    /// The query returning the total number of matching products.
    ///
    /// Groups inside a subquery before counting, so the post-aggregation
    /// rating filter removes the same groups it removes from the page query.
    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM (SELECT p.id");
        builder.push(BASE_JOINS);
        self.push_predicates(&mut builder);
        builder.push(" GROUP BY p.id");
        self.push_group_having(&mut builder);
        builder.push(") AS matched");
        builder
    }

    /// Append the WHERE clause. Single code path for both queries.
    fn push_predicates(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        let mut first = true;

        if let Some(category) = &self.query.category {
            Self::sep(builder, &mut first);
            builder.push("c.slug = ");
            builder.push_bind(category.clone());
        }
        if let Some(brand) = &self.query.brand {
            Self::sep(builder, &mut first);
            builder.push("b.name = ");
            builder.push_bind(brand.clone());
        }
        if let Some(search) = &self.query.search {
            Self::sep(builder, &mut first);
            builder.push("(p.name ILIKE ");
            builder.push_bind(like_pattern(search));
            builder.push(" OR p.description ILIKE ");
            builder.push_bind(like_pattern(search));
            builder.push(")");
        }
        if let Some(min_price) = self.query.min_price {
            Self::sep(builder, &mut first);
            builder.push("p.price >= ");
            builder.push_bind(min_price);
        }
        if let Some(max_price) = self.query.max_price {
            Self::sep(builder, &mut first);
            builder.push("p.price <= ");
            builder.push_bind(max_price);
        }
        if self.query.in_stock {
            Self::sep(builder, &mut first);
            builder.push("p.stock_quantity > 0");
        }
        if self.query.on_sale {
            Self::sep(builder, &mut first);
            builder.push("p.discounted_price IS NOT NULL AND p.discounted_price < p.price");
        }
        if let Some(trending) = self.query.trending {
            Self::sep(builder, &mut first);
            builder.push("p.is_trending = ");
            builder.push_bind(trending);
        }
        if let Some(featured) = self.query.featured {
            Self::sep(builder, &mut first);
            builder.push("p.is_must_have = ");
            builder.push_bind(featured);
        }
    }

    /// Append the post-aggregation rating filter. Single code path for
    /// both queries. Review-less products aggregate to rating 0.
    fn push_group_having(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        if let Some(min_rating) = self.query.min_rating {
            builder.push(" HAVING COALESCE(AVG(r.rating), 0) >= ");
            builder.push_bind(min_rating);
        }
    }

    /// Translate the sort key into an ORDER BY clause. Page query only.
    fn push_order_by(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self.query.sort {
            ProductSort::Newest => {
                builder.push(" ORDER BY p.created_at DESC");
            }
            ProductSort::PriceLow => {
                builder.push(" ORDER BY p.price ASC");
            }
            ProductSort::PriceHigh => {
                builder.push(" ORDER BY p.price DESC");
            }
            ProductSort::Rating => {
                builder.push(" ORDER BY average_rating DESC, p.created_at DESC");
            }
            ProductSort::NameAsc => {
                builder.push(" ORDER BY p.name ASC");
            }
            ProductSort::NameDesc => {
                builder.push(" ORDER BY p.name DESC");
            }
            ProductSort::Popularity => {
                builder.push(" ORDER BY review_count DESC, average_rating DESC");
            }
            ProductSort::Relevance => match &self.query.search {
                // Name matches rank above description-only matches.
                Some(search) => {
                    builder.push(" ORDER BY CASE WHEN p.name ILIKE ");
                    builder.push_bind(like_pattern(search));
                    builder.push(" THEN 0 ELSE 1 END, average_rating DESC");
                }
                None => {
                    builder.push(
                        " ORDER BY p.is_trending DESC, p.is_must_have DESC, average_rating DESC",
                    );
                }
            },
        }
    }

    fn sep(builder: &mut QueryBuilder<'static, Postgres>, first: &mut bool) {
        if *first {
            builder.push(" WHERE ");
            *first = false;
        } else {
            builder.push(" AND ");
        }
    }
}

/// Wrap a search term for substring containment matching.
fn like_pattern(term: &str) -> String {
    format!("%{term}%")
}
