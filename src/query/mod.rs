//! Query module
//!
//! Table-driven request construction for the reporting API.
//!
//! # Overview
//!
//! Each API method is described once, as an [`Operation`] entry in the
//! operations table. A [`QueryBuilder`] collects parameter values for one
//! operation and validates them into a [`Request`](crate::request::Request):
//! required parameters must be present and non-empty, undeclared names are
//! rejected, and path parameters are percent-encoded into the template.

mod builder;
pub mod operations;

pub use builder::{
    build, jobs_create, jobs_delete, jobs_get, jobs_list, jobs_reports_get, jobs_reports_list,
    media_download, media_download_data, report_types_list, QueryBuilder,
};
pub use operations::{Operation, FIELDS, ON_BEHALF_OF_CONTENT_OWNER, PAGE_SIZE, PAGE_TOKEN};

#[cfg(test)]
mod tests;
