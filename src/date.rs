//! Calendar date parsing, serialization, and label helpers shared by the
//! filtering and charting code.

use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The `YYYY-MM-DD` format used for dates in query strings, CSV files and JSON.
pub const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub(crate) use iso_date::{deserialize as deserialize_date, serialize as serialize_date};

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns [Error::InvalidDateFormat] containing `text` if it is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|error| {
        tracing::debug!("Could not parse date \"{text}\": {error}");
        Error::InvalidDateFormat(text.to_owned())
    })
}

/// The first day of the month that `date` falls in.
pub fn first_day_of_month(date: Date) -> Date {
    // Day 1 exists in every month.
    date - time::Duration::days(i64::from(date.day()) - 1)
}

/// Formats a month as a zero-padded `YYYY-MM` bucket key.
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// Formats a month as a chart label, e.g. "Mar 2024".
pub fn month_label(date: Date) -> String {
    format!("{} {}", month_abbrev(date.month()), date.year())
}

/// Formats a day as a chart label, e.g. "Mar 5".
pub fn day_label(date: Date) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
