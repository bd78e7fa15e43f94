//! Request and parameter types

use crate::error::{Error, Result};
use crate::template;
use crate::types::{JsonValue, Method, ParamKind, ParamValue, ResponseType};

/// Declared parameter of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Wire name
    pub name: &'static str,
    /// Must be present and non-empty
    pub required: bool,
    /// Where the value travels
    pub kind: ParamKind,
}

impl Parameter {
    /// Required path parameter
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: ParamKind::Path,
        }
    }

    /// Optional query parameter
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            kind: ParamKind::Query,
        }
    }

    /// Required JSON body
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: ParamKind::Body,
        }
    }
}

/// A parameter bound to a value
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParam {
    pub name: String,
    pub kind: ParamKind,
    pub value: ParamValue,
}

impl BoundParam {
    pub fn new(name: impl Into<String>, kind: ParamKind, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }
}

/// Immutable description of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    operation_id: String,
    method: Method,
    path_template: String,
    path: String,
    params: Vec<BoundParam>,
    response_type: ResponseType,
}

impl Request {
    /// Create a request, expanding path parameters into the template
    ///
    /// Every placeholder in `path_template` must be matched by a non-empty
    /// path parameter in `params`.
    pub fn new(
        operation_id: impl Into<String>,
        method: Method,
        path_template: impl Into<String>,
        params: Vec<BoundParam>,
        response_type: ResponseType,
    ) -> Result<Self> {
        let path_template = path_template.into();
        let path = template::expand(&path_template, |name| {
            params
                .iter()
                .find(|p| p.kind == ParamKind::Path && p.name == name && !p.value.is_empty())
                .map(|p| p.value.render())
        })?;

        Ok(Self {
            operation_id: operation_id.into(),
            method,
            path_template,
            path,
            params,
            response_type,
        })
    }

    /// Operation identifier (e.g. `youtubereporting.jobs.list`)
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Path with all parameters substituted and percent-encoded
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    /// Bound parameters in declaration order
    pub fn params(&self) -> &[BoundParam] {
        &self.params
    }

    /// Look up a bound parameter value by name
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Query string pairs in declaration order (unencoded)
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter(|p| p.kind == ParamKind::Query)
            .map(|p| (p.name.clone(), p.value.render()))
            .collect()
    }

    /// JSON body, if the operation carries one
    pub fn body(&self) -> Option<JsonValue> {
        self.params
            .iter()
            .find(|p| p.kind == ParamKind::Body)
            .map(|p| p.value.to_json())
    }

    /// Derive a copy with a query parameter set
    ///
    /// An existing value keeps its position; a new one is appended.
    #[must_use]
    pub fn with_query_param(&self, name: &str, value: impl Into<ParamValue>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match next
            .params
            .iter_mut()
            .find(|p| p.kind == ParamKind::Query && p.name == name)
        {
            Some(existing) => existing.value = value,
            None => next
                .params
                .push(BoundParam::new(name, ParamKind::Query, value)),
        }
        next
    }

    /// Derive a copy without the named query parameter
    #[must_use]
    pub fn without_query_param(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.params
            .retain(|p| !(p.kind == ParamKind::Query && p.name == name));
        next
    }

    /// Ensure the request produces the given response type
    pub fn expect_response(&self, expected: ResponseType) -> Result<()> {
        if self.response_type == expected {
            Ok(())
        } else {
            Err(Error::ResponseTypeMismatch {
                operation: self.operation_id.clone(),
                expected: expected.to_string(),
                actual: self.response_type.to_string(),
            })
        }
    }
}
