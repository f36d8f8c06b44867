pub mod config;
pub mod resolver;
pub mod timesheet;
pub mod writer;

pub use config::*;
pub use resolver::*;
pub use timesheet::*;
pub use writer::*;
