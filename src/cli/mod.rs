//! CLI module
//!
//! Command-line interface over the reporting service.
//!
//! # Commands
//!
//! - `jobs list|get|create|delete` - Manage reporting jobs
//! - `reports list|get` - Inspect reports generated by a job
//! - `report-types list` - Browse available report types
//! - `media download` - Fetch report data

mod commands;
mod runner;

pub use commands::{
    Cli, Commands, JobsCommand, MediaCommand, OutputFormat, ReportTypesCommand, ReportsCommand,
};
pub use runner::{Output, Runner};
