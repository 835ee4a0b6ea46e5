//! CLI command handlers. Each command is in its own file.

mod config;
mod report;
mod run;
mod scan;

pub use config::run_show_config;
pub use run::{run_pipeline, run_pipeline_to};
pub use scan::run_scan;
