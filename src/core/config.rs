use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::TimesheetError;
use crate::models::Config;

/// Load configuration from project directory with CLI overrides
pub fn load_config(
    project_root: &Path,
    hours: Option<i32>,
    job: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<Config, TimesheetError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(hours, job, output_dir);

    debug!(
        "Configuration loaded: hours={}, job={:?}, output_dir={}",
        config.timesheet.hours,
        config.timesheet.job,
        config.output.dir.display()
    );

    Ok(config)
}
