//! Month grid construction and month navigation.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Weeks start on Sunday, the display convention used by every clinic screen.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Build the day cells for the month containing `reference`.
///
/// The grid spans whole weeks: it begins at the Sunday on or before the first
/// of the month and ends at the Saturday on or after the last of the month,
/// so leading and trailing cells may belong to adjacent months. The result
/// length is always a multiple of 7.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let month_start = reference - Duration::days(reference.day0() as i64);
    let month_end = month_start + Months::new(1) - Duration::days(1);

    let grid_start = week_start_of(month_start);
    let grid_end = week_end_of(month_end);

    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .collect()
}

/// Whether `day` belongs to the same calendar month as `reference`.
pub fn in_month(day: NaiveDate, reference: NaiveDate) -> bool {
    day.year() == reference.year() && day.month() == reference.month()
}

/// The same day of the next month, clamped to the month's length
/// (Jan 31 → Feb 28).
pub fn next_month(reference: NaiveDate) -> NaiveDate {
    reference + Months::new(1)
}

/// The same day of the previous month, clamped to the month's length.
pub fn prev_month(reference: NaiveDate) -> NaiveDate {
    reference - Months::new(1)
}

fn week_start_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

fn week_end_of(day: NaiveDate) -> NaiveDate {
    day + Duration::days((6 - day.weekday().num_days_from_sunday()) as i64)
}
