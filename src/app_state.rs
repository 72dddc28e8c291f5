//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{Error, timezone::get_local_offset, transaction::Transaction};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions loaded at start-up, most recent first.
    ///
    /// Each request clones the [Arc] and works on its own snapshot.
    pub transactions: Arc<[Transaction]>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] serving `transactions`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(transactions: Vec<Transaction>, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            transactions: transactions.into(),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
