use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{load_config, resolve_range, write_csv, Timesheet};
use crate::error::TimesheetError;
use crate::models::{DateRange, FLAG_DATE_FORMAT};

/// Generate options
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// `--start` value, `YYYY-MM-DD`
    pub start: Option<String>,
    /// `--end` value, `YYYY-MM-DD`
    pub end: Option<String>,
    /// Hours per day override
    pub hours: Option<i32>,
    /// Job name override
    pub job: Option<String>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Print the CSV to stdout instead of creating a file
    pub dry_run: bool,
}

/// Result of a generate run
#[derive(Debug)]
pub struct GenerateResult {
    pub range: DateRange,
    /// File written, `None` for a dry run
    pub path: Option<PathBuf>,
    pub days_written: usize,
}

/// Generate a timesheet, defaulting the end date to today's local date
pub fn generate_timesheet(
    project_root: &Path,
    options: GenerateOptions,
) -> Result<GenerateResult, TimesheetError> {
    generate_timesheet_on(project_root, options, Local::now().date_naive())
}

/// Generate a timesheet as if `today` were the current date
pub fn generate_timesheet_on(
    project_root: &Path,
    options: GenerateOptions,
    today: NaiveDate,
) -> Result<GenerateResult, TimesheetError> {
    let config = load_config(project_root, options.hours, options.job, options.output_dir)?;
    let range = resolve_range(options.start.as_deref(), options.end.as_deref(), today)?;

    info!("Start: {}", range.start().format(FLAG_DATE_FORMAT));
    info!("End:   {}", range.end().format(FLAG_DATE_FORMAT));

    let records = Timesheet::new(&range, &config.timesheet);

    if options.dry_run {
        let days_written = write_csv(io::stdout().lock(), records)?;
        info!("Wrote {} days to stdout", days_written);
        return Ok(GenerateResult {
            range,
            path: None,
            days_written,
        });
    }

    let path = config.output_dir(project_root).join(range.file_name());
    debug!("Creating {}", path.display());
    let file = File::create(&path).map_err(|source| TimesheetError::CreateFile {
        path: path.clone(),
        source,
    })?;

    let days_written = write_csv(BufWriter::new(file), records)?;
    info!("Wrote {} days to {}", days_written, path.display());

    Ok(GenerateResult {
        range,
        path: Some(path),
        days_written,
    })
}
