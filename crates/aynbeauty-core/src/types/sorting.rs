//! Sorting types for catalog listings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort orders accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Most recently created first.
    Newest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest average approved rating first.
    Rating,
    /// Product name A to Z.
    NameAsc,
    /// Product name Z to A.
    NameDesc,
    /// Most reviewed first.
    Popularity,
    /// Name matches first when searching, merchandised order otherwise.
    Relevance,
}

impl Default for ProductSort {
    fn default() -> Self {
        Self::Newest
    }
}

impl ProductSort {
    /// The query-string value for this sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Popularity => "popularity",
            Self::Relevance => "relevance",
        }
    }
}

impl FromStr for ProductSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "popularity" => Ok(Self::Popularity),
            // "best-match" is the legacy spelling still sent by older clients.
            "relevance" | "best-match" => Ok(Self::Relevance),
            other => Err(AppError::validation(format!(
                "Unknown sort order: {other}"
            ))),
        }
    }
}
