use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, Duration, OffsetDateTime};

use expense_tracker::{Category, DATE_FORMAT, TransactionType};

/// A utility for creating a CSV file of transactions for the expense_tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the CSV file to.
    #[arg(long, short)]
    output_path: String,

    /// How many days of history to create, ending today.
    #[arg(long, short, default_value_t = 90)]
    days: u16,
}

/// One row of the transactions CSV file.
#[derive(Debug, Serialize)]
struct SampleRow {
    id: i64,
    owner_id: i64,
    description: &'static str,
    amount: String,
    #[serde(rename = "type")]
    type_: TransactionType,
    category: Category,
    date: String,
    notes: &'static str,
}

/// A recurring transaction: how often it occurs and what it looks like.
struct Template {
    every_days: i64,
    offset_days: i64,
    description: &'static str,
    /// The amount in cents.
    cents: i64,
    type_: TransactionType,
    category: Category,
    notes: &'static str,
}

const TEMPLATES: [Template; 9] = [
    Template {
        every_days: 14,
        offset_days: 3,
        description: "Salary",
        cents: 215000,
        type_: TransactionType::Income,
        category: Category::Salary,
        notes: "Fortnightly pay",
    },
    Template {
        every_days: 30,
        offset_days: 11,
        description: "Logo design",
        cents: 45000,
        type_: TransactionType::Income,
        category: Category::Freelance,
        notes: "",
    },
    Template {
        every_days: 7,
        offset_days: 1,
        description: "Weekly groceries",
        cents: 14235,
        type_: TransactionType::Expense,
        category: Category::Food,
        notes: "",
    },
    Template {
        every_days: 3,
        offset_days: 0,
        description: "Coffee",
        cents: 550,
        type_: TransactionType::Expense,
        category: Category::Food,
        notes: "",
    },
    Template {
        every_days: 5,
        offset_days: 2,
        description: "Bus fare",
        cents: 420,
        type_: TransactionType::Expense,
        category: Category::Transport,
        notes: "",
    },
    Template {
        every_days: 30,
        offset_days: 5,
        description: "Power bill",
        cents: 18760,
        type_: TransactionType::Expense,
        category: Category::Bills,
        notes: "Winter rates",
    },
    Template {
        every_days: 30,
        offset_days: 20,
        description: "Streaming subscription",
        cents: 1799,
        type_: TransactionType::Expense,
        category: Category::Entertainment,
        notes: "",
    },
    Template {
        every_days: 45,
        offset_days: 8,
        description: "Pharmacy",
        cents: 3210,
        type_: TransactionType::Expense,
        category: Category::Healthcare,
        notes: "",
    },
    Template {
        every_days: 21,
        offset_days: 13,
        description: "New shoes",
        cents: 12900,
        type_: TransactionType::Expense,
        category: Category::Shopping,
        notes: "",
    },
];

/// Create a CSV file of transactions for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.extension().is_none_or(|extension| extension.is_empty()) {
        eprintln!("Output path must include a file extension (e.g., 'transactions.csv').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating transactions at {output_path:#?}");
    let mut writer = csv::Writer::from_path(output_path)?;

    let today = OffsetDateTime::now_utc().date();
    let rows = sample_rows(today, i64::from(args.days))?;

    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} transactions. Success!", rows.len());

    Ok(())
}

fn sample_rows(today: Date, days: i64) -> Result<Vec<SampleRow>, Box<dyn Error>> {
    let mut rows = Vec::new();

    for days_ago in (0..days).rev() {
        let date = today - Duration::days(days_ago);

        for template in TEMPLATES
            .iter()
            .filter(|template| (days_ago + template.offset_days) % template.every_days == 0)
        {
            rows.push(SampleRow {
                id: rows.len() as i64 + 1,
                owner_id: 1,
                description: template.description,
                amount: Decimal::new(template.cents, 2).to_string(),
                type_: template.type_,
                category: template.category,
                date: date.format(DATE_FORMAT)?,
                notes: template.notes,
            });
        }
    }

    Ok(rows)
}
