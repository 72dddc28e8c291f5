//! Loads a snapshot of one user's transactions from a CSV file.
//!
//! The file must have the header
//! `id,owner_id,description,amount,type,category,date,notes`, e.g.
//!
//! ```text
//! id,owner_id,description,amount,type,category,date,notes
//! 1,1,Weekly groceries,84.20,EXPENSE,FOOD,2024-03-02,
//! 2,1,March salary,4200.00,INCOME,SALARY,2024-03-01,Includes bonus
//! ```

use std::{io::Read, path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    Error,
    date::parse_date,
    transaction::{
        Category, MAX_AMOUNT, OwnerId, Transaction, TransactionId, TransactionType,
        is_valid_amount,
    },
};

/// A CSV row before any of its fields have been validated.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: TransactionId,
    owner_id: OwnerId,
    description: String,
    amount: String,
    #[serde(rename = "type")]
    type_: String,
    category: String,
    date: String,
    notes: Option<String>,
}

impl CsvRow {
    fn into_transaction(self, line: u64) -> Result<Transaction, Error> {
        let amount = Decimal::from_str(self.amount.trim()).map_err(|error| {
            Error::InvalidCSV(format!(
                "line {line}: could not parse amount \"{}\": {error}",
                self.amount
            ))
        })?;

        if !is_valid_amount(amount) {
            return Err(Error::InvalidCSV(format!(
                "line {line}: amount {amount} must be between 0 and {MAX_AMOUNT}, use the type \
                column for the direction of the transaction"
            )));
        }

        let type_ = TransactionType::from_str(&self.type_)?;
        let category = Category::from_str(&self.category)?;
        let date = parse_date(&self.date)?;
        let notes = self.notes.filter(|notes| !notes.trim().is_empty());

        Ok(Transaction::build(amount, type_, category, date, &self.description)
            .owner_id(self.owner_id)
            .notes(notes.as_deref())
            .finalise(self.id))
    }
}

/// Parses transactions from CSV data.
///
/// The returned transactions are ordered most recent first, ties broken by
/// the highest ID first.
///
/// # Errors
/// Returns:
/// - [Error::InvalidCSV] if the CSV is malformed or an amount is invalid,
/// - [Error::UnknownEnumValue] if a type or category is not recognised,
/// - [Error::InvalidDateFormat] if a date is not in the format `YYYY-MM-DD`.
pub fn load_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>, Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|error| Error::InvalidCSV(format!("could not read the header: {error}")))?
        .clone();

    let mut transactions = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|error| Error::InvalidCSV(error.to_string()))?;
        let line = record.position().map_or(0, |position| position.line());

        let row: CsvRow = record
            .deserialize(Some(&headers))
            .map_err(|error| Error::InvalidCSV(format!("line {line}: {error}")))?;

        let transaction = row.into_transaction(line).inspect_err(|error| {
            tracing::warn!("Could not load transaction on line {line}: {error}");
        })?;

        transactions.push(transaction);
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    tracing::debug!("Loaded {} transactions from CSV", transactions.len());

    Ok(transactions)
}

/// Parses transactions from the CSV file at `path`.
///
/// # Errors
/// Returns [Error::InvalidCSV] if the file cannot be opened, otherwise the
/// same errors as [load_transactions_csv].
pub fn load_transactions_file(path: &Path) -> Result<Vec<Transaction>, Error> {
    let file = std::fs::File::open(path).map_err(|error| {
        Error::InvalidCSV(format!("could not open {}: {error}", path.display()))
    })?;

    load_transactions_csv(file)
}
