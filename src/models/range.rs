use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

use crate::error::TimesheetError;

/// Date format accepted on the command line and used in file names
pub const FLAG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable form of [`FLAG_DATE_FORMAT`] for error messages
pub const FLAG_DATE_FORMAT_HINT: &str = "YYYY-MM-DD";

/// Inclusive range of calendar days, start never after end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TimesheetError> {
        if start > end {
            return Err(TimesheetError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Monday through Friday days in the range, in order
    pub fn work_days(&self) -> WorkDays {
        WorkDays {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// `<start>.<end>.csv`
    pub fn file_name(&self) -> String {
        format!(
            "{}.{}.csv",
            self.start.format(FLAG_DATE_FORMAT),
            self.end.format(FLAG_DATE_FORMAT)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(FLAG_DATE_FORMAT),
            self.end.format(FLAG_DATE_FORMAT)
        )
    }
}

/// Returns true for Monday to Friday
pub fn is_work_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Iterator over the work days of a [`DateRange`].
///
/// Cloning it gives an independent cursor, so the sequence can be walked
/// again from any point.
#[derive(Debug, Clone)]
pub struct WorkDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for WorkDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while let Some(current) = self.next {
            if current > self.end {
                self.next = None;
                break;
            }
            self.next = current.succ_opt();
            if is_work_day(current) {
                return Some(current);
            }
        }
        None
    }
}
