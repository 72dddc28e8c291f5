//! Transaction data aggregation for charts and headline totals.
//!
//! Provides functions to total expenses by category, total transactions by
//! type, and bucket income and expenses by calendar month or day.
//!
//! Sums saturate at [Decimal::MAX] instead of overflowing.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use time::{Date, Duration};

use crate::{
    date::first_day_of_month,
    transaction::{Category, Transaction, TransactionType},
};

/// How many days before today the daily view starts.
///
/// Today is included as well, so the daily view always has
/// `DAILY_WINDOW_DAYS + 1` buckets.
pub const DAILY_WINDOW_DAYS: i64 = 30;

/// Separate running sums of income and expenses for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketTotals {
    /// The sum of income amounts.
    pub income: Decimal,
    /// The sum of expense amounts.
    pub expenses: Decimal,
}

impl BucketTotals {
    fn add(&mut self, transaction: &Transaction) {
        let total = match transaction.type_ {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expenses,
        };
        *total = total.saturating_add(transaction.amount);
    }
}

/// Total income, total expenses, and the difference between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeTotals {
    /// The sum of income amounts.
    pub income: Decimal,
    /// The sum of expense amounts.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
}

/// Sums expense amounts by category.
///
/// Income is not included. Categories without expenses are left out, and the
/// remaining categories are in the order they were first seen.
pub fn category_totals(transactions: &[Transaction]) -> Vec<(Category, Decimal)> {
    let mut totals: Vec<(Category, Decimal)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total = total.saturating_add(transaction.amount),
            None => totals.push((transaction.category, transaction.amount)),
        }
    }

    totals
}

/// Converts category totals into percentages of the sum of all categories,
/// rounded to one decimal place.
///
/// Returns `None` if the categories sum to zero since the shares are undefined.
pub fn category_percentages(totals: &[(Category, Decimal)]) -> Option<Vec<(Category, Decimal)>> {
    let sum = totals
        .iter()
        .fold(Decimal::ZERO, |sum, (_, total)| sum.saturating_add(*total));

    if sum.is_zero() {
        return None;
    }

    totals
        .iter()
        .map(|(category, total)| {
            // Divide before scaling so that totals near Decimal::MAX do not overflow.
            let percentage = total
                .checked_div(sum)?
                .checked_mul(Decimal::ONE_HUNDRED)?
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            Some((*category, percentage))
        })
        .collect()
}

/// Sums income and expenses over all of `transactions`.
pub fn type_totals(transactions: &[Transaction]) -> TypeTotals {
    let mut totals = BucketTotals::default();

    for transaction in transactions {
        totals.add(transaction);
    }

    TypeTotals {
        income: totals.income,
        expenses: totals.expenses,
        balance: totals.income.saturating_sub(totals.expenses),
    }
}

/// Sums income and expenses by calendar month.
///
/// # Returns
/// Map from each month (as a Date with day=1) that has at least one
/// transaction to its totals, iterated in chronological order.
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<Date, BucketTotals> {
    let mut totals: BTreeMap<Date, BucketTotals> = BTreeMap::new();

    for transaction in transactions {
        totals
            .entry(first_day_of_month(transaction.date))
            .or_default()
            .add(transaction);
    }

    totals
}

/// Sums income and expenses by day for the [DAILY_WINDOW_DAYS] days up to and
/// including `today`.
///
/// Every day in the window gets a bucket, even if it has no transactions.
/// Transactions outside the window are ignored.
pub fn daily_totals(transactions: &[Transaction], today: Date) -> BTreeMap<Date, BucketTotals> {
    let mut totals: BTreeMap<Date, BucketTotals> = (0..=DAILY_WINDOW_DAYS)
        .map(|days_ago| (today - Duration::days(days_ago), BucketTotals::default()))
        .collect();

    for transaction in transactions {
        if let Some(bucket) = totals.get_mut(&transaction.date) {
            bucket.add(transaction);
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Date, Duration, macros::date};

    use super::{
        BucketTotals, DAILY_WINDOW_DAYS, TypeTotals, category_percentages, category_totals,
        daily_totals, monthly_totals, type_totals,
    };
    use crate::transaction::{Category, Transaction, TransactionType};

    fn create_test_transaction(
        type_: TransactionType,
        category: Category,
        amount: i64,
        date: Date,
    ) -> Transaction {
        Transaction::build(Decimal::from(amount), type_, category, date, "").finalise(0)
    }

    fn mixed_transactions() -> Vec<Transaction> {
        let date = date!(2024 - 03 - 10);

        vec![
            create_test_transaction(TransactionType::Expense, Category::Food, 30, date),
            create_test_transaction(TransactionType::Expense, Category::Food, 20, date),
            create_test_transaction(TransactionType::Expense, Category::Transport, 10, date),
            create_test_transaction(TransactionType::Income, Category::Salary, 1000, date),
        ]
    }

    fn total_for(totals: &[(Category, Decimal)], category: Category) -> Option<Decimal> {
        totals
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    #[test]
    fn category_totals_only_include_expenses() {
        let totals = category_totals(&mixed_transactions());

        assert_eq!(totals.len(), 2);
        assert_eq!(total_for(&totals, Category::Food), Some(Decimal::from(50)));
        assert_eq!(total_for(&totals, Category::Transport), Some(Decimal::from(10)));
        assert_eq!(total_for(&totals, Category::Salary), None);
    }

    #[test]
    fn category_totals_keep_decimal_precision() {
        let date = date!(2024 - 03 - 10);
        let transactions: Vec<_> = (0..10)
            .map(|_| {
                Transaction::build(
                    Decimal::new(1, 1),
                    TransactionType::Expense,
                    Category::Food,
                    date,
                    "",
                )
                .finalise(0)
            })
            .collect();

        let totals = category_totals(&transactions);

        assert_eq!(totals, vec![(Category::Food, Decimal::ONE)]);
    }

    #[test]
    fn category_percentages_are_rounded_to_one_decimal_place() {
        let totals = category_totals(&mixed_transactions());

        let percentages = category_percentages(&totals).unwrap();

        assert_eq!(
            total_for(&percentages, Category::Food),
            Some(Decimal::new(833, 1))
        );
        assert_eq!(
            total_for(&percentages, Category::Transport),
            Some(Decimal::new(167, 1))
        );
    }

    #[test]
    fn category_percentages_are_undefined_for_zero_total() {
        let totals = vec![(Category::Food, Decimal::ZERO)];

        assert_eq!(category_percentages(&totals), None);
        assert_eq!(category_percentages(&[]), None);
    }

    #[test]
    fn category_percentages_handle_very_large_totals() {
        let huge = Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0);

        assert_eq!(
            category_percentages(&[(Category::Shopping, huge)]),
            Some(vec![(Category::Shopping, Decimal::ONE_HUNDRED)])
        );
        assert_eq!(
            category_percentages(&[(Category::Shopping, huge), (Category::Food, huge)]),
            Some(vec![
                (Category::Shopping, Decimal::from(50)),
                (Category::Food, Decimal::from(50)),
            ])
        );
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let date = date!(2024 - 03 - 10);
        let transactions: Vec<_> = [TransactionType::Expense, TransactionType::Expense]
            .into_iter()
            .map(|type_| {
                Transaction::build(Decimal::MAX, type_, Category::Shopping, date, "").finalise(0)
            })
            .collect();

        assert_eq!(
            category_totals(&transactions),
            vec![(Category::Shopping, Decimal::MAX)]
        );
        assert_eq!(
            type_totals(&transactions),
            TypeTotals {
                income: Decimal::ZERO,
                expenses: Decimal::MAX,
                balance: Decimal::MIN,
            }
        );
        assert_eq!(monthly_totals(&transactions)[&date!(2024 - 03 - 01)].expenses, Decimal::MAX);
    }

    #[test]
    fn type_totals_sum_income_and_expenses() {
        let totals = type_totals(&mixed_transactions());

        assert_eq!(
            totals,
            TypeTotals {
                income: Decimal::from(1000),
                expenses: Decimal::from(60),
                balance: Decimal::from(940),
            }
        );
    }

    #[test]
    fn type_totals_balance_can_be_negative() {
        let transactions = vec![
            create_test_transaction(
                TransactionType::Expense,
                Category::Bills,
                150,
                date!(2024 - 03 - 01),
            ),
            create_test_transaction(
                TransactionType::Income,
                Category::Freelance,
                100,
                date!(2024 - 03 - 02),
            ),
        ];

        assert_eq!(type_totals(&transactions).balance, Decimal::from(-50));
    }

    #[test]
    fn type_totals_of_nothing_are_zero() {
        assert_eq!(type_totals(&[]), TypeTotals::default());
    }

    #[test]
    fn monthly_totals_are_in_chronological_order() {
        let transactions = vec![
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                5,
                date!(2024 - 03 - 15),
            ),
            create_test_transaction(
                TransactionType::Income,
                Category::Salary,
                100,
                date!(2023 - 12 - 20),
            ),
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                7,
                date!(2024 - 01 - 02),
            ),
            create_test_transaction(
                TransactionType::Income,
                Category::Salary,
                100,
                date!(2024 - 03 - 01),
            ),
        ];

        let totals = monthly_totals(&transactions);

        let months: Vec<_> = totals.keys().copied().collect();
        assert_eq!(
            months,
            vec![
                date!(2023 - 12 - 01),
                date!(2024 - 01 - 01),
                date!(2024 - 03 - 01)
            ]
        );
        assert_eq!(
            totals[&date!(2024 - 03 - 01)],
            BucketTotals {
                income: Decimal::from(100),
                expenses: Decimal::from(5),
            }
        );
    }

    #[test]
    fn monthly_totals_skip_months_without_transactions() {
        let transactions = vec![
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                5,
                date!(2024 - 01 - 15),
            ),
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                5,
                date!(2024 - 04 - 15),
            ),
        ];

        assert_eq!(monthly_totals(&transactions).len(), 2);
    }

    #[test]
    fn daily_totals_always_have_a_full_window() {
        let today = date!(2024 - 03 - 15);

        let totals = daily_totals(&[], today);

        assert_eq!(totals.len(), DAILY_WINDOW_DAYS as usize + 1);
        assert_eq!(totals.keys().next(), Some(&date!(2024 - 02 - 14)));
        assert_eq!(totals.keys().last(), Some(&today));
        assert!(totals.values().all(|bucket| *bucket == BucketTotals::default()));
    }

    #[test]
    fn daily_totals_fold_in_transactions_and_ignore_old_ones() {
        let today = date!(2024 - 03 - 15);
        let transactions = vec![
            create_test_transaction(TransactionType::Expense, Category::Food, 12, today),
            create_test_transaction(TransactionType::Income, Category::Salary, 500, today),
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                3,
                today - Duration::days(DAILY_WINDOW_DAYS),
            ),
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                99,
                today - Duration::days(DAILY_WINDOW_DAYS + 1),
            ),
        ];

        let totals = daily_totals(&transactions, today);

        assert_eq!(totals.len(), DAILY_WINDOW_DAYS as usize + 1);
        assert_eq!(
            totals[&today],
            BucketTotals {
                income: Decimal::from(500),
                expenses: Decimal::from(12),
            }
        );
        assert_eq!(
            totals[&(today - Duration::days(DAILY_WINDOW_DAYS))].expenses,
            Decimal::from(3)
        );
        let expenses: Decimal = totals.values().map(|bucket| bucket.expenses).sum();
        assert_eq!(expenses, Decimal::from(15));
    }
}
