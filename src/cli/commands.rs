//! CLI commands and argument parsing

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// YouTube Reporting API command-line client
#[derive(Parser, Debug)]
#[command(name = "yt-reporting")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content owner to act on behalf of
    #[arg(long, global = true)]
    pub on_behalf_of: Option<String>,

    /// Page size hint for list commands
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Stop list commands after this many items
    #[arg(long, global = true)]
    pub max_items: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage reporting jobs
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },

    /// Inspect reports generated by a job
    Reports {
        #[command(subcommand)]
        command: ReportsCommand,
    },

    /// Browse available report types
    ReportTypes {
        #[command(subcommand)]
        command: ReportTypesCommand,
    },

    /// Fetch report data
    Media {
        #[command(subcommand)]
        command: MediaCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// List jobs
    List {
        /// Include system-managed jobs
        #[arg(long)]
        include_system_managed: bool,
    },

    /// Show one job
    Get { job_id: String },

    /// Create a job for a report type
    Create {
        /// Report type ID, e.g. channel_basic_a2
        #[arg(long)]
        report_type: String,

        /// Job name
        #[arg(long)]
        name: String,
    },

    /// Delete a job
    Delete { job_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// List reports of a job
    List {
        job_id: String,

        /// Only reports created after this time (RFC 3339)
        #[arg(long)]
        created_after: Option<DateTime<Utc>>,

        /// Only reports whose data starts at or after this time (RFC 3339)
        #[arg(long)]
        start_time_at_or_after: Option<DateTime<Utc>>,

        /// Only reports whose data starts before this time (RFC 3339)
        #[arg(long)]
        start_time_before: Option<DateTime<Utc>>,
    },

    /// Show one report
    Get { job_id: String, report_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ReportTypesCommand {
    /// List report types
    List {
        /// Include system-managed report types
        #[arg(long)]
        include_system_managed: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MediaCommand {
    /// Download report data by resource name or download URL
    Download {
        /// Media resource name, or a report `downloadUrl`
        resource: String,

        /// Write the data to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the media metadata instead of the data
        #[arg(long)]
        metadata: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}
