//! Transactions and the sources they are loaded from.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The closed `TransactionType` and `Category` enums
//! - Loading a snapshot of transactions from a CSV file
//! - Route handlers for listing transactions and categories

mod categories_endpoint;
mod core;
mod csv;
mod kind;
mod list_endpoint;

pub use categories_endpoint::get_categories;
pub use core::{
    MAX_AMOUNT, OwnerId, Transaction, TransactionBuilder, TransactionId, is_valid_amount,
};
pub use self::csv::{load_transactions_csv, load_transactions_file};
pub use kind::{Category, TransactionType};
pub use list_endpoint::get_transactions;
