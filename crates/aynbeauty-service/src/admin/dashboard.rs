//! Sales dashboard assembly for the admin back office.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use aynbeauty_core::config::StoreConfig;
use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::analytics::{
    AnalyticsRepository, DailyRevenue, LowStockProduct, StatusCount, TopProduct,
};

/// How many best sellers the dashboard shows.
const TOP_PRODUCTS_LIMIT: i64 = 5;

/// How far back the "recent" figures look.
const REPORT_WINDOW_DAYS: i64 = 30;

/// Generates the admin sales dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Analytics repository.
    analytics_repo: Arc<AnalyticsRepository>,
    /// Stock level at or below which a product is flagged.
    low_stock_threshold: i32,
}

/// Dashboard data for the admin back office.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Start of the recent-activity window.
    pub period_start: chrono::DateTime<Utc>,
    /// End of the recent-activity window.
    pub period_end: chrono::DateTime<Utc>,
    /// Revenue across all non-cancelled orders, ever.
    pub revenue_all_time: Decimal,
    /// Revenue across non-cancelled orders in the window.
    pub revenue_recent: Decimal,
    /// Order counts per status.
    pub orders_by_status: Vec<StatusCount>,
    /// Total customer accounts.
    pub total_customers: i64,
    /// Customer accounts created in the window.
    pub new_customers: i64,
    /// Best sellers by units sold.
    pub top_products: Vec<TopProduct>,
    /// Products at or below the low-stock threshold.
    pub low_stock_products: Vec<LowStockProduct>,
    /// Daily revenue series across the window.
    pub revenue_by_day: Vec<DailyRevenue>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(analytics_repo: Arc<AnalyticsRepository>, store: &StoreConfig) -> Self {
        Self {
            analytics_repo,
            low_stock_threshold: store.low_stock_threshold,
        }
    }

    /// Generates the dashboard for the past 30 days.
    pub async fn generate(&self) -> Result<DashboardReport, AppError> {
        let now = Utc::now();
        let window_start = now - Duration::days(REPORT_WINDOW_DAYS);

        let revenue_all_time = self.analytics_repo.revenue_all_time().await?;
        let revenue_recent = self.analytics_repo.revenue_since(window_start).await?;
        let orders_by_status = self.analytics_repo.order_counts_by_status().await?;
        let total_customers = self.analytics_repo.customer_count().await?;
        let new_customers = self
            .analytics_repo
            .new_customers_since(window_start)
            .await?;
        let top_products = self.analytics_repo.top_products(TOP_PRODUCTS_LIMIT).await?;
        let low_stock_products = self
            .analytics_repo
            .low_stock(self.low_stock_threshold)
            .await?;
        let revenue_by_day = self.analytics_repo.revenue_by_day(window_start).await?;

        Ok(DashboardReport {
            period_start: window_start,
            period_end: now,
            revenue_all_time,
            revenue_recent,
            orders_by_status,
            total_customers,
            new_customers,
            top_products,
            low_stock_products,
            revenue_by_day,
        })
    }
}
