//! Filtering for the transaction list.
//!
//! Raw query parameters are resolved into [FilterCriteria] at the boundary,
//! after which filtering is a pure function of the transactions and criteria.

mod criteria;
mod period;

pub use criteria::{FilterCriteria, FilterParams, filter_transactions};
pub use period::{DateWindow, Period, resolve_date_window};
