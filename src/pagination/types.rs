//! Pagination types
//!
//! Defines the page and continuation-state abstractions used by the
//! paginator.

use crate::error::{Error, Result};
use crate::request::Request;
use std::collections::HashSet;

/// One page of results plus the token for the next one
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    ///
    /// An empty token is treated the same as no token.
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            next_token: next_token.filter(|t| !t.is_empty()),
        }
    }

    /// A final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    /// Check if more pages follow
    pub fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tracks continuation state across page fetches
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Request every page is derived from
    pub template: Request,
    /// Token for the next fetch; `None` before the first page
    pub current_token: Option<String>,
    /// No further pages will be requested
    pub exhausted: bool,
    /// Page size to request, if any
    pub page_size: Option<u32>,
    /// Pages fetched so far
    pub pages_fetched: u64,
    /// Tokens already sent in this sequence
    issued_tokens: HashSet<String>,
}

impl PaginationState {
    /// Create state for a fresh sequence
    pub fn new(template: Request, page_size: Option<u32>) -> Self {
        Self {
            template,
            current_token: None,
            exhausted: false,
            page_size,
            pages_fetched: 0,
            issued_tokens: HashSet::new(),
        }
    }

    /// Start from a previously returned token instead of the first page
    #[must_use]
    pub fn resume_from(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.current_token = Some(token);
        }
        self
    }

    /// Mark the sequence as complete
    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    /// Record a fetched page and move to its continuation token
    ///
    /// A missing token ends the sequence. A token that was already sent in
    /// this sequence also ends it and is reported as `RepeatedPageToken`.
    pub fn advance(&mut self, next_token: Option<String>) -> Result<()> {
        self.pages_fetched += 1;
        if let Some(sent) = self.current_token.take() {
            self.issued_tokens.insert(sent);
        }

        match next_token {
            Some(token) if self.issued_tokens.contains(&token) => {
                self.exhausted = true;
                Err(Error::RepeatedPageToken { token })
            }
            Some(token) => {
                self.current_token = Some(token);
                Ok(())
            }
            None => {
                self.exhausted = true;
                Ok(())
            }
        }
    }
}
