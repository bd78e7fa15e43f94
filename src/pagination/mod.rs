//! Pagination module
//!
//! Automatic aggregation of continuation-token list operations.
//!
//! # Overview
//!
//! List operations return a bounded page of items plus an opaque
//! `nextPageToken`. The [`Paginator`] re-issues the list request with
//! `pageToken` set to that value until the server stops returning one,
//! presenting the pages as a single ordered sequence. Fetching is strictly
//! sequential: page k+1 is never requested before page k has arrived.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Page, PaginationState};
