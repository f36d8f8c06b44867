use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for timesheet generation
#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid {flag} {value:?}, expected format {expected:?}")]
    InvalidDate {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("start day {start} is after end day {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("could not create file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write records: {0}")]
    Write(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimesheetError>;
