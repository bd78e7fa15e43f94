//! Request module
//!
//! An immutable description of a single API call: operation id, HTTP
//! method, path template, bound parameters in declaration order and the
//! expected response type.
//!
//! Requests are produced by the [`query`](crate::query) builders and
//! consumed by a [`Transport`](crate::transport::Transport). Continuation
//! requests issued by the paginator are derived copies; a built request is
//! never mutated in place.

mod types;

pub use types::{BoundParam, Parameter, Request};

#[cfg(test)]
mod tests;
