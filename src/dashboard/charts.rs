//! Builds the labelled chart series for the dashboard.
//!
//! This module turns transactions into four chart series:
//! - **Category**: expenses grouped by category, with a colour per category
//! - **Income/Expenses**: total income, total expenses and the balance
//! - **Monthly trend**: income and expenses for each month with transactions
//! - **Daily trend**: income and expenses for each of the last 31 days
//!
//! Each series can also be rendered as ECharts options with [ChartBundle::to_echarts].

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::{Line, Pie, bar::Bar},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;
use time::Date;

use crate::{
    dashboard::aggregation::{
        category_percentages, category_totals, daily_totals, monthly_totals, type_totals,
    },
    date::{day_label, month_key, month_label},
    transaction::Transaction,
};

/// Colours assigned to categories by position, wrapping around when there
/// are more categories than colours.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#8BC34A",
];

/// Colour for income values.
pub const INCOME_COLOR: &str = "#28a745";
/// Colour for expense values.
pub const EXPENSE_COLOR: &str = "#dc3545";
/// Colour for the balance value.
pub const BALANCE_COLOR: &str = "#007bff";

/// The fixed labels of the income/expenses chart.
pub const INCOME_EXPENSE_LABELS: [&str; 3] = ["Income", "Expenses", "Balance"];

/// Expenses grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    /// The category labels, e.g. "Food".
    pub labels: Vec<String>,
    /// The total expenses for each category.
    pub values: Vec<Decimal>,
    /// Each category's share of all expenses, or `None` if expenses sum to zero.
    pub percentages: Option<Vec<Decimal>>,
    /// The colour for each category.
    pub colors: Vec<&'static str>,
}

/// Total income, total expenses and the balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeExpenseSeries {
    /// Always [INCOME_EXPENSE_LABELS].
    pub labels: [&'static str; 3],
    /// The values in the same order as the labels.
    pub values: [Decimal; 3],
    /// The colours in the same order as the labels.
    pub colors: [&'static str; 3],
}

/// Income and expenses over time, aligned by index with the labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// The sortable bucket keys, `YYYY-MM` for months and `YYYY-MM-DD` for days.
    pub keys: Vec<String>,
    /// The human readable label for each bucket.
    pub labels: Vec<String>,
    /// The income for each bucket.
    pub income: Vec<Decimal>,
    /// The expenses for each bucket.
    pub expenses: Vec<Decimal>,
    /// The colour of the income series.
    pub income_color: &'static str,
    /// The colour of the expense series.
    pub expense_color: &'static str,
}

/// All of the chart series for one set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    /// Expenses by category.
    pub category: CategorySeries,
    /// Income, expenses and balance.
    pub income_expense: IncomeExpenseSeries,
    /// Monthly income and expenses.
    pub monthly: TrendSeries,
    /// Daily income and expenses.
    pub daily: TrendSeries,
}

/// What the dashboard should display for a set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    /// There are no transactions, show a placeholder instead of every chart.
    Empty,
    /// The charts to display.
    Charts(ChartBundle),
}

/// Builds the chart series for `transactions`.
///
/// Returns [ChartView::Empty] if `transactions` is missing or empty. `today`
/// is the last day of the daily trend.
pub fn build_chart_view(transactions: Option<&[Transaction]>, today: Date) -> ChartView {
    match transactions {
        Some(transactions) if !transactions.is_empty() => {
            ChartView::Charts(build_chart_bundle(transactions, today))
        }
        _ => ChartView::Empty,
    }
}

fn build_chart_bundle(transactions: &[Transaction], today: Date) -> ChartBundle {
    let bundle = ChartBundle {
        category: category_series(transactions),
        income_expense: income_expense_series(transactions),
        monthly: monthly_series(transactions),
        daily: daily_series(transactions, today),
    };

    tracing::debug!(
        "Built charts for {} transactions: {} categories, {} months",
        transactions.len(),
        bundle.category.labels.len(),
        bundle.monthly.labels.len()
    );

    bundle
}

fn category_series(transactions: &[Transaction]) -> CategorySeries {
    let totals = category_totals(transactions);
    let percentages = category_percentages(&totals)
        .map(|percentages| percentages.into_iter().map(|(_, p)| p).collect());

    CategorySeries {
        labels: totals
            .iter()
            .map(|(category, _)| category.label().to_owned())
            .collect(),
        values: totals.iter().map(|(_, total)| *total).collect(),
        percentages,
        colors: (0..totals.len())
            .map(|index| CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()])
            .collect(),
    }
}

fn income_expense_series(transactions: &[Transaction]) -> IncomeExpenseSeries {
    let totals = type_totals(transactions);

    IncomeExpenseSeries {
        labels: INCOME_EXPENSE_LABELS,
        values: [totals.income, totals.expenses, totals.balance],
        colors: [INCOME_COLOR, EXPENSE_COLOR, BALANCE_COLOR],
    }
}

fn monthly_series(transactions: &[Transaction]) -> TrendSeries {
    let totals = monthly_totals(transactions);

    TrendSeries {
        keys: totals.keys().copied().map(month_key).collect(),
        labels: totals.keys().copied().map(month_label).collect(),
        income: totals.values().map(|bucket| bucket.income).collect(),
        expenses: totals.values().map(|bucket| bucket.expenses).collect(),
        income_color: INCOME_COLOR,
        expense_color: EXPENSE_COLOR,
    }
}

fn daily_series(transactions: &[Transaction], today: Date) -> TrendSeries {
    let totals = daily_totals(transactions, today);

    TrendSeries {
        keys: totals.keys().map(|day| day.to_string()).collect(),
        labels: totals.keys().copied().map(day_label).collect(),
        income: totals.values().map(|bucket| bucket.income).collect(),
        expenses: totals.values().map(|bucket| bucket.expenses).collect(),
        income_color: INCOME_COLOR,
        expense_color: EXPENSE_COLOR,
    }
}

/// A dashboard chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl ChartBundle {
    /// Renders every series as ECharts options.
    pub fn to_echarts(&self) -> Vec<DashboardChart> {
        vec![
            DashboardChart {
                id: "category-chart",
                options: category_chart(&self.category).to_string(),
            },
            DashboardChart {
                id: "income-expense-chart",
                options: income_expense_chart(&self.income_expense).to_string(),
            },
            DashboardChart {
                id: "monthly-chart",
                options: trend_chart("Monthly Trend", None, &self.monthly).to_string(),
            },
            DashboardChart {
                id: "daily-chart",
                options: trend_chart("Daily Activity", Some("Last 30 days"), &self.daily)
                    .to_string(),
            },
        ]
    }
}

fn category_chart(series: &CategorySeries) -> Chart {
    let data: Vec<(f64, &str)> = series
        .values
        .iter()
        .zip(&series.labels)
        .map(|(value, label)| (to_chart_value(*value), label.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("1%"))
        .color(series.colors.iter().map(|&color| color.into()).collect::<Vec<charming::element::Color>>())
        .series(Pie::new().name("Expenses").radius("65%").data(data))
}

fn income_expense_chart(series: &IncomeExpenseSeries) -> Chart {
    let mut chart = Chart::new()
        .title(Title::new().text("Income vs Expenses"))
        .tooltip(axis_tooltip())
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.to_vec()),
        )
        .y_axis(Axis::new().type_(AxisType::Value));

    // One stacked series per label so that each bar gets its own colour.
    for (index, (label, color)) in series.labels.iter().zip(series.colors).enumerate() {
        let data: Vec<Option<f64>> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| (i == index).then(|| to_chart_value(*value)))
            .collect();

        chart = chart.series(
            Bar::new()
                .name(*label)
                .stack("Totals")
                .item_style(ItemStyle::new().color(color))
                .data(data),
        );
    }

    chart
}

fn trend_chart(title: &str, subtitle: Option<&str>, series: &TrendSeries) -> Chart {
    let mut title = Title::new().text(title);
    if let Some(subtitle) = subtitle {
        title = title.subtext(subtitle);
    }

    Chart::new()
        .title(title)
        .tooltip(axis_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Line::new()
                .name("Income")
                .item_style(ItemStyle::new().color(series.income_color))
                .data(to_chart_values(&series.income)),
        )
        .series(
            Line::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(series.expense_color))
                .data(to_chart_values(&series.expenses)),
        )
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

fn axis_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

/// Converts a decimal amount for plotting. Only chart rendering uses floats.
fn to_chart_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn to_chart_values(values: &[Decimal]) -> Vec<f64> {
    values.iter().copied().map(to_chart_value).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Date, Duration, macros::date};

    use super::{
        BALANCE_COLOR, CATEGORY_PALETTE, ChartBundle, ChartView, EXPENSE_COLOR, INCOME_COLOR,
        INCOME_EXPENSE_LABELS, build_chart_view,
    };
    use crate::transaction::{Category, Transaction, TransactionType};

    const TODAY: Date = time::macros::date!(2024 - 03 - 15);

    fn create_test_transaction(
        type_: TransactionType,
        category: Category,
        amount: i64,
        date: Date,
    ) -> Transaction {
        Transaction::build(Decimal::from(amount), type_, category, date, "").finalise(0)
    }

    fn mixed_transactions() -> Vec<Transaction> {
        vec![
            create_test_transaction(TransactionType::Expense, Category::Food, 30, TODAY),
            create_test_transaction(
                TransactionType::Expense,
                Category::Food,
                20,
                date!(2024 - 02 - 10),
            ),
            create_test_transaction(
                TransactionType::Expense,
                Category::Transport,
                10,
                date!(2024 - 03 - 01),
            ),
            create_test_transaction(
                TransactionType::Income,
                Category::Salary,
                1000,
                date!(2024 - 01 - 31),
            ),
        ]
    }

    #[track_caller]
    fn must_get_bundle(view: ChartView) -> ChartBundle {
        match view {
            ChartView::Charts(bundle) => bundle,
            ChartView::Empty => panic!("want charts, got the empty state"),
        }
    }

    #[test]
    fn no_transactions_gives_empty_state() {
        assert_eq!(build_chart_view(Some(&[]), TODAY), ChartView::Empty);
        assert_eq!(build_chart_view(None, TODAY), ChartView::Empty);
    }

    #[test]
    fn category_series_has_labels_values_and_percentages() {
        let bundle = must_get_bundle(build_chart_view(Some(&mixed_transactions()), TODAY));
        let category = bundle.category;

        assert_eq!(category.labels.len(), 2);
        let food = category
            .labels
            .iter()
            .position(|label| label == "Food")
            .expect("missing Food label");
        let transport = category
            .labels
            .iter()
            .position(|label| label == "Transport")
            .expect("missing Transport label");
        assert_eq!(category.values[food], Decimal::from(50));
        assert_eq!(category.values[transport], Decimal::from(10));

        let percentages = category.percentages.expect("percentages should be defined");
        assert_eq!(percentages[food], Decimal::new(833, 1));
        assert_eq!(percentages[transport], Decimal::new(167, 1));
    }

    #[test]
    fn category_colours_cycle_through_the_palette() {
        let transactions: Vec<_> = [
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
        ]
        .into_iter()
        .map(|category| create_test_transaction(TransactionType::Expense, category, 1, TODAY))
        .collect();

        let bundle = must_get_bundle(build_chart_view(Some(&transactions), TODAY));

        let colors = bundle.category.colors;
        assert_eq!(colors.len(), 10);
        for (index, color) in colors.iter().enumerate() {
            assert_eq!(*color, CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]);
        }
    }

    #[test]
    fn only_income_has_no_category_percentages() {
        let transactions = vec![create_test_transaction(
            TransactionType::Income,
            Category::Salary,
            100,
            TODAY,
        )];

        let bundle = must_get_bundle(build_chart_view(Some(&transactions), TODAY));

        assert!(bundle.category.labels.is_empty());
        assert_eq!(bundle.category.percentages, None);
    }

    #[test]
    fn income_expense_series_has_fixed_labels() {
        let bundle = must_get_bundle(build_chart_view(Some(&mixed_transactions()), TODAY));

        let series = bundle.income_expense;
        assert_eq!(series.labels, INCOME_EXPENSE_LABELS);
        assert_eq!(
            series.values,
            [Decimal::from(1000), Decimal::from(60), Decimal::from(940)]
        );
        assert_eq!(series.colors, [INCOME_COLOR, EXPENSE_COLOR, BALANCE_COLOR]);
    }

    #[test]
    fn monthly_series_is_sorted_and_labelled() {
        let mut transactions = mixed_transactions();
        transactions.reverse();

        let bundle = must_get_bundle(build_chart_view(Some(&transactions), TODAY));

        let monthly = bundle.monthly;
        assert_eq!(monthly.keys, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(monthly.labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
        assert_eq!(
            monthly.income,
            vec![Decimal::from(1000), Decimal::ZERO, Decimal::ZERO]
        );
        assert_eq!(
            monthly.expenses,
            vec![Decimal::ZERO, Decimal::from(20), Decimal::from(40)]
        );
    }

    #[test]
    fn daily_series_covers_the_last_31_days() {
        let bundle = must_get_bundle(build_chart_view(Some(&mixed_transactions()), TODAY));

        let daily = bundle.daily;
        assert_eq!(daily.labels.len(), 31);
        assert_eq!(daily.income.len(), 31);
        assert_eq!(daily.expenses.len(), 31);
        assert_eq!(daily.keys.first().map(String::as_str), Some("2024-02-14"));
        assert_eq!(daily.keys.last().map(String::as_str), Some("2024-03-15"));
        assert_eq!(daily.labels.first().map(String::as_str), Some("Feb 14"));
        assert_eq!(daily.labels.last().map(String::as_str), Some("Mar 15"));
        assert_eq!(daily.expenses.last(), Some(&Decimal::from(30)));

        let first_of_march = (date!(2024 - 03 - 01) - (TODAY - Duration::days(30)))
            .whole_days() as usize;
        assert_eq!(daily.expenses[first_of_march], Decimal::from(10));
    }

    #[test]
    fn building_twice_gives_independent_equal_bundles() {
        let transactions = mixed_transactions();

        let first = build_chart_view(Some(&transactions), TODAY);
        let other = build_chart_view(Some(&transactions[..1]), TODAY);
        let second = build_chart_view(Some(&transactions), TODAY);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn renders_four_echarts() {
        let bundle = must_get_bundle(build_chart_view(Some(&mixed_transactions()), TODAY));

        let charts = bundle.to_echarts();

        let ids: Vec<_> = charts.iter().map(|chart| chart.id).collect();
        assert_eq!(
            ids,
            vec![
                "category-chart",
                "income-expense-chart",
                "monthly-chart",
                "daily-chart"
            ]
        );
        assert!(charts[0].options.contains("Food"));
        assert!(charts[2].options.contains("Jan 2024"));
        assert!(charts[3].options.contains("Mar 15"));
    }

    #[test]
    fn empty_state_serializes_with_a_tag() {
        let json = serde_json::to_value(ChartView::Empty).unwrap();

        assert_eq!(json, serde_json::json!({ "state": "empty" }));
    }
}
