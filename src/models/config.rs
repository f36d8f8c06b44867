use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "timesheet.toml";

/// Configuration loaded from timesheet.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timesheet: TimesheetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What goes into every generated row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// Working hours per day. Not range-checked: values pushing past
    /// midnight wrap around the clock.
    #[serde(default = "default_hours")]
    pub hours: i32,
    /// Job label written on every row
    #[serde(default = "default_job")]
    pub job: String,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            hours: default_hours(),
            job: default_job(),
        }
    }
}

fn default_hours() -> i32 {
    8
}

fn default_job() -> String {
    "Work Time".to_string()
}

/// Where the CSV file is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the project root unless absolute
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from timesheet.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        hours: Option<i32>,
        job: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(h) = hours {
            self.timesheet.hours = h;
        }
        if let Some(j) = job {
            self.timesheet.job = j;
        }
        if let Some(d) = output_dir {
            self.output.dir = d;
        }
        self
    }

    /// Resolve the output directory against the project root
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        if self.output.dir.is_absolute() {
            self.output.dir.clone()
        } else {
            project_root.join(&self.output.dir)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
