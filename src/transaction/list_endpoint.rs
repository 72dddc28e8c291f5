//! Defines the route handler that lists the filtered transactions.
use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    dashboard::{TypeTotals, type_totals},
    filter::{FilterParams, filter_transactions},
    timezone::local_today,
};

use super::Transaction;

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct TransactionsState {
    /// All of the transactions, most recent first.
    pub transactions: Arc<[Transaction]>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The filtered transactions and the headline totals.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    transactions: Vec<Transaction>,
    count: usize,
    /// Computed over every transaction, the filters only narrow the list.
    totals: TypeTotals,
}

/// List the transactions matching the query filters, most recent first.
pub async fn get_transactions(
    State(state): State<TransactionsState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<TransactionsResponse>, Error> {
    let today = local_today(&state.local_timezone)?;
    let criteria = params
        .resolve(today)
        .inspect_err(|error| tracing::warn!("Rejected transaction filters: {error}"))?;

    let transactions = filter_transactions(&state.transactions, &criteria);
    let totals = type_totals(&state.transactions);

    tracing::debug!(
        "{} of {} transactions matched the filters",
        transactions.len(),
        state.transactions.len()
    );

    Ok(Json(TransactionsResponse {
        count: transactions.len(),
        transactions,
        totals,
    }))
}
