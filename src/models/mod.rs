pub mod config;
pub mod range;
pub mod record;

pub use config::*;
pub use range::*;
pub use record::*;
