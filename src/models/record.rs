use chrono::{NaiveDate, NaiveTime};
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Date column format, e.g. `02-Jan-2006`
pub const CSV_DATE_FORMAT: &str = "%d-%b-%Y";

/// Clock column format, e.g. `03:04 pm`
pub const CSV_TIME_FORMAT: &str = "%I:%M %P";

/// Column names, in output order
pub const CSV_HEADER: [&str; 5] = ["Date", "Job Name", "From time", "To time", "Hours"];

/// One timesheet row, serialized in [`CSV_HEADER`] column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDayRecord {
    pub date: NaiveDate,
    pub job_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub hours: i32,
}

impl WorkDayRecord {
    pub fn formatted_date(&self) -> String {
        self.date.format(CSV_DATE_FORMAT).to_string()
    }

    pub fn formatted_start(&self) -> String {
        self.start_time.format(CSV_TIME_FORMAT).to_string()
    }

    pub fn formatted_end(&self) -> String {
        self.end_time.format(CSV_TIME_FORMAT).to_string()
    }
}

impl Serialize for WorkDayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(CSV_HEADER.len())?;
        row.serialize_element(&self.formatted_date())?;
        row.serialize_element(&self.job_name)?;
        row.serialize_element(&self.formatted_start())?;
        row.serialize_element(&self.formatted_end())?;
        row.serialize_element(&self.hours)?;
        row.end()
    }
}
