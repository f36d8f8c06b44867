use chrono::{Duration, NaiveTime};

use crate::models::{DateRange, TimesheetConfig, WorkDayRecord, WorkDays};

/// Hour of day every work day starts at
pub const BASE_HOUR: u32 = 8;

/// Lazily builds one [`WorkDayRecord`] per work day of a range.
///
/// The start and end clock times are computed once up front. The end time
/// wraps around midnight when `hours` pushes it past 24:00 (or before 00:00
/// for negative values); no validation is applied.
#[derive(Debug, Clone)]
pub struct Timesheet {
    days: WorkDays,
    job_name: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    hours: i32,
}

impl Timesheet {
    pub fn new(range: &DateRange, config: &TimesheetConfig) -> Self {
        let start_time = base_time();
        // NaiveTime + Duration wraps modulo 24h
        let end_time = start_time + Duration::hours(i64::from(config.hours));

        Self {
            days: range.work_days(),
            job_name: config.job.clone(),
            start_time,
            end_time,
            hours: config.hours,
        }
    }
}

impl Iterator for Timesheet {
    type Item = WorkDayRecord;

    fn next(&mut self) -> Option<WorkDayRecord> {
        let date = self.days.next()?;
        Some(WorkDayRecord {
            date,
            job_name: self.job_name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            hours: self.hours,
        })
    }
}

fn base_time() -> NaiveTime {
    NaiveTime::MIN + Duration::hours(i64::from(BASE_HOUR))
}
