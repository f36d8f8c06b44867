use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::error::TimesheetError;
use crate::models::{DateRange, FLAG_DATE_FORMAT, FLAG_DATE_FORMAT_HINT};

/// Resolve the effective date range from optional `--start`/`--end` values.
///
/// A missing end means `today`. A missing start means the Monday on or
/// before the resolved end.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange, TimesheetError> {
    let end_day = match end {
        Some(value) => parse_flag_date("--end", value)?,
        None => today,
    };

    let start_day = match start {
        Some(value) => parse_flag_date("--start", value)?,
        None => monday_on_or_before(end_day),
    };

    let range = DateRange::new(start_day, end_day)?;
    debug!("Resolved range: {}", range);
    Ok(range)
}

/// Most recent Monday on or before `date`
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn parse_flag_date(flag: &'static str, value: &str) -> Result<NaiveDate, TimesheetError> {
    let invalid = || TimesheetError::InvalidDate {
        flag,
        value: value.to_string(),
        expected: FLAG_DATE_FORMAT_HINT,
    };

    // chrono alone accepts `2024-1-5`, `+2024-01-05` and short or signed years
    if !has_flag_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, FLAG_DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `DDDD-DD-DD`
fn has_flag_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
