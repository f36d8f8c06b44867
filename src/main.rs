use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use timesheet_gen::commands::{generate_timesheet, GenerateOptions};
use timesheet_gen::TimesheetError;

/// timesheet-gen - write a weekday timesheet CSV for a date range
#[derive(Parser)]
#[command(name = "timesheet-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start date in YYYY-MM-DD format, defaults to the Monday on or before the end date
    #[arg(long)]
    start: Option<String>,

    /// End date in YYYY-MM-DD format, defaults to today
    #[arg(long)]
    end: Option<String>,

    /// Number of hours per day [default: 8]
    #[arg(long, allow_negative_numbers = true)]
    hours: Option<i32>,

    /// Job name [default: "Work Time"]
    #[arg(long)]
    job: Option<String>,

    /// Directory to write the CSV file to (defaults to current directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output. Status lines are logged at info level to stderr;
    /// RUST_LOG overrides the level and `RUST_LOG=warn` hides them
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Status lines go to stderr; stdout is reserved for --dry-run output
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = std::env::current_dir()
        .map_err(TimesheetError::from)
        .and_then(|project_root| {
            let options = GenerateOptions {
                start: cli.start,
                end: cli.end,
                hours: cli.hours,
                job: cli.job,
                output_dir: cli.output_dir,
                dry_run: cli.dry_run,
            };
            generate_timesheet(&project_root, options)
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
