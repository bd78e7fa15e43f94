//! Common types used throughout the reporting client
//!
//! Shared definitions for HTTP methods, parameter kinds and values, response
//! type tags and retry backoff.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by reporting operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Where a parameter travels in the HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Substituted into the path template
    Path,
    /// Appended to the query string
    Query,
    /// Serialized as the JSON request body
    Body,
}

/// A caller-supplied parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain string
    String(String),
    /// Boolean flag, rendered as `true`/`false`
    Bool(bool),
    /// Integer, rendered in decimal
    Int(i64),
    /// Structured JSON (body parameters)
    Json(JsonValue),
}

impl ParamValue {
    /// Absent-equivalent values fail the required check
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::String(s) => s.is_empty(),
            ParamValue::Json(v) => v.is_null(),
            ParamValue::Bool(_) | ParamValue::Int(_) => false,
        }
    }

    /// Render the value as it appears in a path or query string (unencoded)
    pub fn render(&self) -> String {
        match self {
            ParamValue::String(s) => s.clone(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Json(JsonValue::String(s)) => s.clone(),
            ParamValue::Json(v) => v.to_string(),
        }
    }

    /// Convert into a JSON value for the request body
    pub fn to_json(&self) -> JsonValue {
        match self {
            ParamValue::String(s) => JsonValue::String(s.clone()),
            ParamValue::Bool(b) => JsonValue::Bool(*b),
            ParamValue::Int(i) => JsonValue::from(*i),
            ParamValue::Json(v) => v.clone(),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::String(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<JsonValue> for ParamValue {
    fn from(value: JsonValue) -> Self {
        ParamValue::Json(value)
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Tag naming the response an operation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    Job,
    Report,
    Media,
    /// Raw media bytes (`alt=media`)
    MediaData,
    Empty,
    ListJobs,
    ListReports,
    ListReportTypes,
}

impl ResponseType {
    /// Whether the response carries a page of items and a continuation token
    pub fn is_list(self) -> bool {
        matches!(
            self,
            ResponseType::ListJobs | ResponseType::ListReports | ResponseType::ListReportTypes
        )
    }

    /// Wire name of the response message
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Job => "Job",
            ResponseType::Report => "Report",
            ResponseType::Media => "Media",
            ResponseType::MediaData => "MediaData",
            ResponseType::Empty => "Empty",
            ResponseType::ListJobs => "ListJobsResponse",
            ResponseType::ListReports => "ListReportsResponse",
            ResponseType::ListReportTypes => "ListReportTypesResponse",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_conversion() {
        let get: reqwest::Method = Method::GET.into();
        assert_eq!(reqwest::Method::GET, get);
        let delete: reqwest::Method = Method::DELETE.into();
        assert_eq!(reqwest::Method::DELETE, delete);
    }

    #[test]
    fn test_method_default() {
        assert_eq!(Method::default(), Method::GET);
        assert_eq!(Method::POST.to_string(), "POST");
    }

    #[test]
    fn test_param_value_empty() {
        assert!(ParamValue::from("").is_empty());
        assert!(ParamValue::Json(JsonValue::Null).is_empty());
        assert!(!ParamValue::from(false).is_empty());
        assert!(!ParamValue::from(0i64).is_empty());
        assert!(!ParamValue::from("x").is_empty());
    }

    #[test]
    fn test_param_value_render() {
        assert_eq!(ParamValue::from(true).render(), "true");
        assert_eq!(ParamValue::from(50u32).render(), "50");
        assert_eq!(ParamValue::from("abc").render(), "abc");
        assert_eq!(ParamValue::Json(json!("quoted")).render(), "quoted");
    }

    #[test]
    fn test_response_type_is_list() {
        assert!(ResponseType::ListJobs.is_list());
        assert!(ResponseType::ListReportTypes.is_list());
        assert!(!ResponseType::Job.is_list());
        assert!(!ResponseType::MediaData.is_list());
        assert_eq!(ResponseType::ListReports.to_string(), "ListReportsResponse");
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }
}
