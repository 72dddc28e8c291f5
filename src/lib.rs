//! An expense tracker that filters transactions and aggregates them into
//! chart data.
//!
//! This library loads a snapshot of transactions from a CSV file and serves
//! a JSON API for:
//! - listing transactions filtered by search text, type, category and period,
//! - the dashboard charts: expenses by category, income vs. expenses, and the
//!   monthly and daily trends.
//!
//! The filtering and aggregation functions are pure and take "today" as an
//! argument, so they can be used without the server.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod date;
mod endpoints;
mod error;
mod filter;
mod logging;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use dashboard::{
    BALANCE_COLOR, BucketTotals, CATEGORY_PALETTE, CategorySeries, ChartBundle, ChartView,
    DAILY_WINDOW_DAYS, DashboardChart, EXPENSE_COLOR, INCOME_COLOR, INCOME_EXPENSE_LABELS,
    IncomeExpenseSeries, TrendSeries, TypeTotals, build_chart_view, category_percentages,
    category_totals, daily_totals, monthly_totals, type_totals,
};
pub use date::{DATE_FORMAT, parse_date};
pub use error::Error;
pub use filter::{
    DateWindow, FilterCriteria, FilterParams, Period, filter_transactions, resolve_date_window,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::{get_local_offset, local_today};
pub use transaction::{
    Category, MAX_AMOUNT, OwnerId, Transaction, TransactionBuilder, TransactionId,
    TransactionType, is_valid_amount, load_transactions_csv, load_transactions_file,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
