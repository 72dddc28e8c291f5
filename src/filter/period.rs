//! Resolves named periods and custom date ranges into a concrete date window.

use time::{Date, Duration};

use crate::{
    Error,
    date::{first_day_of_month, parse_date},
};

/// A named shorthand for a date window relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Only today.
    Today,
    /// Monday of the current week up to today.
    ThisWeek,
    /// The first of the current month up to today.
    ThisMonth,
    /// The whole of the previous calendar month.
    LastMonth,
    /// An explicit start and end date.
    Custom,
}

impl Period {
    /// Parse a period keyword such as `this_week`.
    ///
    /// Returns `None` for unrecognised keywords, which callers should treat as
    /// "no date restriction" rather than an error.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "today" => Some(Self::Today),
            "this_week" => Some(Self::ThisWeek),
            "this_month" => Some(Self::ThisMonth),
            "last_month" => Some(Self::LastMonth),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// The keyword used in query strings.
    pub fn as_keyword(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::Custom => "custom",
        }
    }
}

/// A closed date interval. A missing start means there is no lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// The first date in the window, or `None` for no lower bound.
    pub start: Option<Date>,
    /// The last date in the window.
    pub end: Date,
}

impl DateWindow {
    /// A window from `start` to `end`, both inclusive.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }

    /// Whether `date` falls inside the window, inclusive on both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start.is_none_or(|start| date >= start) && date <= self.end
    }
}

/// Resolve a period keyword into a date window relative to `today`.
///
/// `custom_start` and `custom_end` are only used for the `custom` period. A
/// missing custom start leaves the window unbounded below, a missing custom
/// end defaults to `today`. Empty strings are treated as missing.
///
/// Returns `Ok(None)` when the period is absent or not recognised, meaning no
/// date filtering should happen.
///
/// # Errors
/// Returns [Error::InvalidDateFormat] if a custom date is not in the format `YYYY-MM-DD`.
pub fn resolve_date_window(
    period: Option<&str>,
    custom_start: Option<&str>,
    custom_end: Option<&str>,
    today: Date,
) -> Result<Option<DateWindow>, Error> {
    let Some(period) = period.and_then(Period::from_keyword) else {
        return Ok(None);
    };

    let window = match period {
        Period::Today => DateWindow::new(today, today),
        Period::ThisWeek => {
            let days_since_monday = i64::from(today.weekday().number_days_from_monday());
            DateWindow::new(today - Duration::days(days_since_monday), today)
        }
        Period::ThisMonth => DateWindow::new(first_day_of_month(today), today),
        Period::LastMonth => {
            let last_day = first_day_of_month(today) - Duration::days(1);
            DateWindow::new(first_day_of_month(last_day), last_day)
        }
        Period::Custom => {
            let start = non_empty(custom_start).map(parse_date).transpose()?;
            let end = non_empty(custom_end)
                .map(parse_date)
                .transpose()?
                .unwrap_or(today);

            DateWindow { start, end }
        }
    };

    Ok(Some(window))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}
