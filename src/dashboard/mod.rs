//! Dashboard module
//!
//! Aggregates transactions into totals and time buckets, and turns them into
//! the chart series shown on the dashboard.

mod aggregation;
mod charts;
mod handlers;

pub use aggregation::{
    BucketTotals, DAILY_WINDOW_DAYS, TypeTotals, category_percentages, category_totals,
    daily_totals, monthly_totals, type_totals,
};
pub use charts::{
    BALANCE_COLOR, CATEGORY_PALETTE, CategorySeries, ChartBundle, ChartView, DashboardChart,
    EXPENSE_COLOR, INCOME_COLOR, INCOME_EXPENSE_LABELS, IncomeExpenseSeries, TrendSeries,
    build_chart_view,
};
pub use handlers::get_dashboard;
