//! Reporting Endpoints
//!
//! All aggregates are server-computed; the client only fetches and renders.

use super::{get_data, query_string, ApiResult};
use crate::config::AppConfig;
use crate::models::{ComprehensiveReport, DiseaseStats, InventoryStats, MonthlyReport, Timeline};

pub async fn monthly_report(config: &AppConfig, month: u32, year: i32) -> ApiResult<MonthlyReport> {
    let month = month.to_string();
    let year = year.to_string();
    let path = format!(
        "/api/reporting/monthly{}",
        query_string(&[("month", &month), ("year", &year)])
    );
    get_data(config, &path).await
}

pub async fn disease_stats(config: &AppConfig) -> ApiResult<DiseaseStats> {
    get_data(config, "/api/reporting/diseases").await
}

pub async fn inventory_stats(config: &AppConfig) -> ApiResult<InventoryStats> {
    get_data(config, "/api/reporting/inventory").await
}

pub async fn comprehensive_report(
    config: &AppConfig,
    month: u32,
    year: i32,
) -> ApiResult<ComprehensiveReport> {
    let month = month.to_string();
    let year = year.to_string();
    let path = format!(
        "/api/comprehensive-reports/comprehensive{}",
        query_string(&[("month", &month), ("year", &year)])
    );
    get_data(config, &path).await
}

/// Combined day-by-day timeline for one date range
pub async fn chronological_timeline(
    config: &AppConfig,
    resolution: &str,
    start_date: &str,
    end_date: &str,
) -> ApiResult<Timeline> {
    let path = format!(
        "/api/chronological/timeline{}",
        query_string(&[
            ("dataType", "combined"),
            ("resolution", resolution),
            ("startDate", start_date),
            ("endDate", end_date),
        ])
    );
    get_data(config, &path).await
}
