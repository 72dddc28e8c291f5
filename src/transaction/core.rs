//! Defines the core data model for transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::{Category, TransactionType};

/// The largest amount a single transaction may have, one quadrillion.
///
/// Summing amounts this size cannot overflow a [Decimal] for any realistic
/// number of transactions.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Alias for the integer type used to refer to the owner of a transaction.
///
/// The owner is never inspected here, it is carried through so that callers
/// can map results back to their own records.
pub type OwnerId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The user the transaction belongs to.
    pub owner_id: OwnerId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Always a magnitude, the direction of the money comes from `type_`.
    pub amount: Decimal,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction happened.
    #[serde(
        serialize_with = "crate::date::serialize_date",
        deserialize_with = "crate::date::deserialize_date"
    )]
    pub date: Date,
    /// Free text notes about the transaction.
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    ///
    /// `amount` must be a magnitude from zero to [MAX_AMOUNT], check
    /// untrusted input with [is_valid_amount] first. The direction of the
    /// money comes from `type_`.
    pub fn build(
        amount: Decimal,
        type_: TransactionType,
        category: Category,
        date: Date,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            owner_id: 0,
            description: description.to_owned(),
            amount,
            type_,
            category,
            date,
            notes: None,
        }
    }

    /// Whether this transaction is money spent.
    pub fn is_expense(&self) -> bool {
        self.type_ == TransactionType::Expense
    }
}

/// Whether `amount` can be used as a transaction amount: not negative and no
/// larger than [MAX_AMOUNT].
pub fn is_valid_amount(amount: Decimal) -> bool {
    (amount.is_zero() || amount.is_sign_positive()) && amount <= MAX_AMOUNT
}

/// A builder for creating [Transaction] instances.
///
/// ```
/// use rust_decimal::Decimal;
/// use time::macros::date;
///
/// use expense_tracker::{Category, Transaction, TransactionType};
///
/// let transaction = Transaction::build(
///         Decimal::new(4599, 2),
///         TransactionType::Expense,
///         Category::Food,
///         date!(2025 - 01 - 15),
///         "Coffee shop purchase",
///     )
///     .notes(Some("Flat white and a muffin"))
///     .finalise(42);
///
/// assert_eq!(transaction.amount, Decimal::new(4599, 2));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The user the transaction belongs to.
    pub owner_id: OwnerId,
    /// A human-readable description of the transaction.
    pub description: String,
    /// The magnitude of the transaction.
    pub amount: Decimal,
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The category the transaction is filed under.
    pub category: Category,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Free text notes about the transaction.
    pub notes: Option<String>,
}

impl TransactionBuilder {
    /// Set the owner of the transaction.
    pub fn owner_id(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Set the notes for the transaction.
    pub fn notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes.map(str::to_owned);
        self
    }

    /// Create the transaction with the given ID.
    pub fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            owner_id: self.owner_id,
            description: self.description,
            amount: self.amount,
            type_: self.type_,
            category: self.category,
            date: self.date,
            notes: self.notes,
        }
    }
}
