//! The closed sets of transaction types and categories.
//!
//! Only the request and CSV boundaries deal with strings, everything past
//! them works with these enums.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// The canonical name used in query strings and CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(Error::UnknownEnumValue {
                kind: "transaction type",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    Salary,
    Freelance,
    Investment,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Other,
    ];

    /// The canonical name used in query strings and CSV files, e.g. "FOOD".
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Shopping => "SHOPPING",
            Self::Bills => "BILLS",
            Self::Healthcare => "HEALTHCARE",
            Self::Education => "EDUCATION",
            Self::Salary => "SALARY",
            Self::Freelance => "FREELANCE",
            Self::Investment => "INVESTMENT",
            Self::Other => "OTHER",
        }
    }

    /// The human readable name shown in charts, e.g. "Food".
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase();

        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| Error::UnknownEnumValue {
                kind: "category",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, TransactionType};
    use crate::Error;

    #[test]
    fn parses_transaction_types_ignoring_case() {
        assert_eq!("INCOME".parse(), Ok(TransactionType::Income));
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
    }

    #[test]
    fn unknown_transaction_type_is_an_error() {
        assert_eq!(
            "TRANSFER".parse::<TransactionType>(),
            Err(Error::UnknownEnumValue {
                kind: "transaction type",
                value: "TRANSFER".to_owned()
            })
        );
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            "Groceries".parse::<Category>(),
            Err(Error::UnknownEnumValue {
                kind: "category",
                value: "Groceries".to_owned()
            })
        );
    }

    #[test]
    fn serializes_with_canonical_names() {
        assert_eq!(
            serde_json::to_string(&Category::Healthcare).unwrap(),
            "\"HEALTHCARE\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"INCOME\""
        );
    }
}
