//! timesheet-gen - weekday timesheet generator
//!
//! Given a date range, writes one CSV row per Monday-to-Friday day with a
//! fixed job name and fixed working hours.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementation (generate)
//! - **core**: Range resolution, work day enumeration, CSV writing, config loading
//! - **models**: Data structures (config, date range, record)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, TimesheetError};
