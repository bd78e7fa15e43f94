// Allow common clippy pedantic lints that aren't critical for this codebase
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

//! # YouTube Reporting API client
//!
//! A typed client for the YouTube Reporting API (`youtubereporting/v1`)
//! with table-driven request construction and automatic pagination.
//!
//! ## Features
//!
//! - **Typed Requests**: Every API method is described once in an operations
//!   table; parameters are validated before anything is sent
//! - **Auto-Pagination**: List operations follow `nextPageToken` lazily and
//!   present all pages as one sequence
//! - **Pluggable Transport**: Retries, rate limiting and auth live behind the
//!   [`Transport`] trait
//! - **Multiple Auth Types**: Bearer token, API key, OAuth2 refresh token
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yt_reporting::{ReportingService, ServiceConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServiceConfig::from_file("reporting.yaml")?;
//!     let service = ReportingService::from_config(config)?.on_behalf_of("content-owner");
//!
//!     // Every job, across however many pages the server returns
//!     let jobs = service.list_jobs(None)?.collect_all().await?;
//!
//!     for job in &jobs {
//!         let id = job.id.as_deref().unwrap_or_default();
//!         let mut reports = service.list_reports(id, &Default::default())?;
//!         while let Some(report) = reports.next().await? {
//!             let data = service.download_report(&report).await?;
//!             println!("{} bytes", data.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      ReportingService                           │
//! │  create_job  get_job  list_jobs  list_reports  download_media   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────┬──────────────────────────┐
//! │    Query     │      Paginator        │        Transport         │
//! ├──────────────┼───────────────────────┼──────────────────────────┤
//! │ Operations   │ pageToken /           │ HttpTransport            │
//! │ QueryBuilder │   nextPageToken       │   Retry, Backoff         │
//! │ Request      │ Lazy, resumable       │   Rate Limit, Auth       │
//! └──────────────┴───────────────────────┴──────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// RFC 6570 path template expansion
pub mod template;

/// Immutable request descriptions
pub mod request;

/// Operations table and query builder
pub mod query;

/// API resources and response traits
pub mod model;

/// Transport seam
pub mod transport;

/// Continuation-token pagination
pub mod pagination;

/// Authentication implementations
pub mod auth;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Service configuration
pub mod config;

/// Typed service facade
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use http::HttpTransport;
pub use model::{ApiResource, Job, ListResponse, Media, Report, ReportType};
pub use pagination::{Page, Paginator};
pub use query::QueryBuilder;
pub use request::Request;
pub use service::{ReportFilter, ReportingService};
pub use transport::{Response, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
