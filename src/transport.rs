//! Transport seam
//!
//! A [`Transport`] executes a fully built [`Request`] and returns the raw
//! [`Response`]. Retries, authentication and rate limiting live behind this
//! trait; the paginator and service only see success or an opaque error.
//!
//! [`HttpTransport`](crate::http::HttpTransport) is the production
//! implementation. Tests plug in scripted stubs.

use crate::error::{Error, Result};
use crate::request::Request;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Executes requests against the reporting service
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request
    async fn execute(&self, request: &Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &Request) -> Result<Response> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn execute(&self, request: &Request) -> Result<Response> {
        (**self).execute(request).await
    }
}

/// A successful response body
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    content_type: Option<String>,
    body: Bytes,
}

impl Response {
    /// Create a response from raw parts
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// A 200 response carrying a JSON document
    pub fn json(value: &serde_json::Value) -> Self {
        Self::new(
            200,
            Some("application/json".to_string()),
            value.to_string().into_bytes(),
        )
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Decode the body as JSON
    ///
    /// An empty body decodes as `{}` so bodiless responses such as
    /// `jobs.delete` still map onto [`Empty`](crate::model::Empty).
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Empty, Job};
    use serde_json::json;

    #[test]
    fn test_response_json() {
        let response = Response::json(&json!({"id": "job-1"}));
        assert_eq!(response.status(), 200);
        assert_eq!(response.content_type(), Some("application/json"));

        let job: Job = response.decode().unwrap();
        assert_eq!(job.id.as_deref(), Some("job-1"));
    }

    #[test]
    fn test_empty_body_decodes_as_empty_object() {
        let response = Response::new(204, None, Vec::new());
        let _: Empty = response.decode().unwrap();
    }

    #[test]
    fn test_decode_error() {
        let response = Response::new(200, None, "not json");
        let err = response.decode::<Job>().unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
