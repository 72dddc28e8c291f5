//! Dashboard HTTP handlers.
//!
//! The dashboard applies the same filters as the transaction list and then
//! builds the chart series for the transactions that remain.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    dashboard::charts::{ChartView, DashboardChart, build_chart_view},
    filter::{FilterParams, filter_transactions},
    timezone::local_today,
    transaction::Transaction,
};

/// The state needed for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The transactions to chart.
    pub transactions: Arc<[Transaction]>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The chart series plus the ECharts options for each chart.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    view: ChartView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    charts: Vec<DashboardChart>,
}

/// Get the chart data for the transactions matching the query filters.
///
/// Responds with `{"state": "empty"}` when no transactions match.
pub async fn get_dashboard(
    State(state): State<DashboardState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<DashboardResponse>, Error> {
    let today = local_today(&state.local_timezone)?;
    let criteria = params
        .resolve(today)
        .inspect_err(|error| tracing::warn!("Rejected dashboard filters: {error}"))?;

    let transactions = filter_transactions(&state.transactions, &criteria);
    let view = build_chart_view(Some(&transactions), today);
    let charts = match &view {
        ChartView::Charts(bundle) => bundle.to_echarts(),
        ChartView::Empty => Vec::new(),
    };

    Ok(Json(DashboardResponse { view, charts }))
}
