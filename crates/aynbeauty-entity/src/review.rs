//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer review of a product.
///
/// Rating aggregates are always derived from approved rows at query time,
/// never denormalized onto the product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: i64,
    /// The reviewed product.
    pub product_id: i64,
    /// The authoring user.
    pub user_id: i64,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Short headline.
    pub title: Option<String>,
    /// Review text.
    pub body: Option<String>,
    /// Whether a moderator has approved the review for display.
    pub is_approved: bool,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// An approved review joined with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    /// Unique review identifier.
    pub id: i64,
    /// The reviewed product.
    pub product_id: i64,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Short headline.
    pub title: Option<String>,
    /// Review text.
    pub body: Option<String>,
    /// First name of the reviewer.
    pub author_name: String,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to submit a new review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// The reviewed product.
    pub product_id: i64,
    /// The authoring user.
    pub user_id: i64,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Short headline.
    pub title: Option<String>,
    /// Review text.
    pub body: Option<String>,
}
