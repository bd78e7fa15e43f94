//! Token paginator
//!
//! Presents a paged list operation as one lazily fetched sequence of items.

use super::types::{Page, PaginationState};
use crate::error::{Error, Result};
use crate::model::ListResponse;
use crate::query::{PAGE_SIZE, PAGE_TOKEN};
use crate::request::Request;
use crate::transport::Transport;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Pull-based paginator over a continuation-token list operation
///
/// Each call to [`next`](Self::next) either returns a buffered item or
/// issues at most one request through the transport. Items are produced in
/// server order, page by page. The sequence ends only when the server omits
/// the continuation token (or [`stop`](Self::stop) is called); there is no
/// internal cap on the number of pages.
///
/// A transport or decode failure leaves the state untouched, so calling
/// `next` again re-issues the same request with the same token.
pub struct Paginator<R: ListResponse, T: Transport> {
    transport: T,
    state: PaginationState,
    buffer: VecDeque<R::Item>,
    /// Protocol error held back until the page that carried it is drained
    pending_error: Option<Error>,
    _response: PhantomData<fn() -> R>,
}

impl<R: ListResponse, T: Transport> Paginator<R, T> {
    /// Create a paginator over `template`
    ///
    /// A `pageToken` already set on the template is used as the starting
    /// token, so a sequence can be resumed. `page_size` overrides any
    /// `pageSize` on the template; with neither, the server picks. A zero
    /// `page_size` is rejected before any request is made.
    pub fn new(transport: T, template: Request, page_size: Option<u32>) -> Result<Self> {
        if page_size == Some(0) {
            return Err(Error::invalid_param(
                PAGE_SIZE,
                "expected a positive integer, got '0'",
            ));
        }
        if !template.response_type().is_list() {
            return Err(Error::NotPaginated {
                operation: template.operation_id().to_string(),
            });
        }
        template.expect_response(R::RESPONSE_TYPE)?;

        let start_token = template.param(PAGE_TOKEN).map(|v| v.render());
        let template = template.without_query_param(PAGE_TOKEN);

        let mut state = PaginationState::new(template, page_size);
        if let Some(token) = start_token {
            state = state.resume_from(token);
        }

        Ok(Self {
            transport,
            state,
            buffer: VecDeque::new(),
            pending_error: None,
            _response: PhantomData,
        })
    }

    /// Next item, `Ok(None)` at the end of the sequence
    pub async fn next(&mut self) -> Result<Option<R::Item>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if let Some(err) = self.pending_error.take() {
                return Err(err);
            }
            if self.state.exhausted {
                return Ok(None);
            }

            let page = self.fetch_page().await?;
            self.buffer.extend(page.items);
        }
    }

    /// Next page of items, `Ok(None)` at the end of the sequence
    ///
    /// Items already buffered by [`next`](Self::next) are returned first as
    /// a page of their own.
    pub async fn next_page(&mut self) -> Result<Option<Page<R::Item>>> {
        if !self.buffer.is_empty() {
            let items = self.buffer.drain(..).collect();
            return Ok(Some(Page {
                items,
                next_token: self.state.current_token.clone(),
            }));
        }
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        if self.state.exhausted {
            return Ok(None);
        }

        self.fetch_page().await.map(Some)
    }

    /// Stop requesting pages; buffered items are still returned
    pub fn stop(&mut self) {
        debug!(
            operation = %self.state.template.operation_id(),
            pages = self.state.pages_fetched,
            "Pagination stopped by caller"
        );
        self.state.mark_exhausted();
    }

    /// Drain the whole sequence
    pub async fn collect_all(mut self) -> Result<Vec<R::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Drain at most `max` items, fetching no page beyond what is needed
    pub async fn collect_up_to(&mut self, max: usize) -> Result<Vec<R::Item>> {
        let mut items = Vec::new();
        while items.len() < max {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Convert into a stream of items
    pub fn into_stream(self) -> impl Stream<Item = Result<R::Item>> {
        stream::try_unfold(self, |mut paginator| async move {
            let item = paginator.next().await?;
            Ok::<_, Error>(item.map(|item| (item, paginator)))
        })
    }

    /// Token the next fetch will send
    pub fn current_token(&self) -> Option<&str> {
        self.state.current_token.as_deref()
    }

    /// No further pages will be requested
    pub fn is_exhausted(&self) -> bool {
        self.state.exhausted
    }

    pub fn pages_fetched(&self) -> u64 {
        self.state.pages_fetched
    }

    pub fn page_size(&self) -> Option<u32> {
        self.state.page_size
    }

    /// The request the next fetch would issue
    pub fn next_request(&self) -> Request {
        let mut request = match self.state.page_size {
            Some(size) => self.state.template.with_query_param(PAGE_SIZE, size),
            None => self.state.template.clone(),
        };
        if let Some(token) = &self.state.current_token {
            request = request.with_query_param(PAGE_TOKEN, token.as_str());
        }
        request
    }

    async fn fetch_page(&mut self) -> Result<Page<R::Item>> {
        let request = self.next_request();
        debug!(
            operation = %request.operation_id(),
            page = self.state.pages_fetched + 1,
            token = ?self.state.current_token,
            "Fetching page"
        );

        let response = self.transport.execute(&request).await?;
        let page = response.decode::<R>()?.into_page();

        if let Err(err) = self.state.advance(page.next_token.clone()) {
            warn!(
                operation = %request.operation_id(),
                error = %err,
                "Ending pagination on protocol error"
            );
            self.pending_error = Some(err);
        }

        debug!(
            items = page.items.len(),
            has_next = page.has_next(),
            "Fetched page"
        );
        Ok(page)
    }
}

impl<R: ListResponse, T: Transport> fmt::Debug for Paginator<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("operation", &self.state.template.operation_id())
            .field("current_token", &self.state.current_token)
            .field("exhausted", &self.state.exhausted)
            .field("pages_fetched", &self.state.pages_fetched)
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}
