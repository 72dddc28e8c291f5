//! Narrows a list of transactions by search text, type, category and date.

use std::str::FromStr;

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    filter::period::{DateWindow, resolve_date_window},
    transaction::{Category, Transaction, TransactionType},
};

/// The raw filter parameters from a request's query string.
///
/// Every field is optional and empty strings are treated the same as missing
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterParams {
    /// Text to search for in transaction descriptions.
    pub search: Option<String>,
    /// A transaction type name, e.g. "EXPENSE".
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// A category name, e.g. "FOOD".
    pub category: Option<String>,
    /// A period keyword, e.g. "this_month".
    pub period: Option<String>,
    /// The first date for the `custom` period.
    #[serde(rename = "startDate", alias = "start_date")]
    pub start_date: Option<String>,
    /// The last date for the `custom` period.
    #[serde(rename = "endDate", alias = "end_date")]
    pub end_date: Option<String>,
}

impl FilterParams {
    /// Parse the raw parameters into [FilterCriteria], resolving any period
    /// relative to `today`.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::UnknownEnumValue] if the type or category is not recognised,
    /// - [Error::InvalidDateFormat] if a custom date is not in the format `YYYY-MM-DD`.
    pub fn resolve(&self, today: Date) -> Result<FilterCriteria, Error> {
        let search = non_empty(self.search.as_deref()).map(str::to_owned);
        let type_ = non_empty(self.type_.as_deref())
            .map(TransactionType::from_str)
            .transpose()?;
        let category = non_empty(self.category.as_deref())
            .map(Category::from_str)
            .transpose()?;
        let window = resolve_date_window(
            self.period.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            today,
        )?;

        let criteria = FilterCriteria {
            search,
            type_,
            category,
            window,
        };

        tracing::debug!("Resolved filter criteria: {criteria:?}");

        Ok(criteria)
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

/// Parsed filter criteria. Fields that are `None` do not constrain the results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Only keep transactions whose description contains this text, ignoring case.
    pub search: Option<String>,
    /// Only keep transactions of this type.
    pub type_: Option<TransactionType>,
    /// Only keep transactions in this category.
    pub category: Option<Category>,
    /// Only keep transactions dated inside this window.
    pub window: Option<DateWindow>,
}

impl FilterCriteria {
    /// Whether `transaction` satisfies every criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let search_matches = self.search.as_ref().is_none_or(|search| {
            transaction
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
        });

        search_matches
            && self.type_.is_none_or(|type_| transaction.type_ == type_)
            && self
                .category
                .is_none_or(|category| transaction.category == category)
            && self
                .window
                .is_none_or(|window| window.contains(transaction.date))
    }
}

/// Returns the transactions that match `criteria`, keeping their original order.
pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| criteria.matches(transaction))
        .cloned()
        .collect()
}
