// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! YouTube Reporting CLI
//!
//! Command-line interface for the reporting API

use clap::Parser;
use yt_reporting::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default level
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
