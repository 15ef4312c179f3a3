//! Aggregated views over a user's ledger.
//!
//! - Monthly buckets keyed by UTC (year, month)
//! - Category buckets keyed by label
//!
//! Stores compute the raw sums (in SQL for PostgreSQL); ordering is applied
//! here so every adapter answers the same way.

pub mod buckets;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use buckets::{bucket_by_category, bucket_by_month, order_months, sort_categories};
pub use service::AnalyticsService;
pub use types::{CategoryTotal, MonthlyTotal};
