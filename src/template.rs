//! Path template expansion
//!
//! Handles `{name}` and `{+name}` placeholders in operation path templates
//! such as `v1/jobs/{jobId}/reports/{reportId}` or `v1/media/{+resourceName}`.
//!
//! Simple expansion percent-encodes everything outside the RFC 3986
//! unreserved set. Reserved expansion (`+`) also keeps `/` and the
//! sub-delimiters, but still encodes `?`, `#` and `%` so the value cannot
//! escape the path component. A value that would form a `.` or `..` path
//! segment is rejected, since URL resolution would collapse it into a
//! different endpoint.

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for matching path placeholders: {name} or {+name}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\+?)([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

/// Everything except ALPHA / DIGIT / "-" / "." / "_" / "~"
const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// SIMPLE minus ":" "/" "@" "[" "]" and the sub-delims
const RESERVED: &AsciiSet = &SIMPLE
    .remove(b':')
    .remove(b'/')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// A placeholder found in a path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Parameter name
    pub name: String,
    /// `{+name}` reserved expansion
    pub reserved: bool,
}

/// Expand a path template, looking each placeholder up with `lookup`
///
/// Fails with `MissingParameter` naming the first placeholder that has no
/// value, or `InvalidParameter` for a value that forms a dot segment.
pub fn expand<F>(template: &str, mut lookup: F) -> Result<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut error: Option<Error> = None;

    let expanded = PLACEHOLDER_REGEX.replace_all(template, |cap: &Captures<'_>| {
        let reserved = !cap[1].is_empty();
        let name = &cap[2];
        match lookup(name) {
            Some(value) if has_dot_segment(&value, reserved) => {
                error.get_or_insert_with(|| {
                    Error::invalid_param(name, format!("'{value}' is not a valid path segment"))
                });
                String::new()
            }
            Some(value) => encode(&value, reserved),
            None => {
                error.get_or_insert_with(|| Error::missing_param(name));
                String::new()
            }
        }
    });

    match error {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

/// Whether `value` expands to a `.` or `..` segment
///
/// Simple expansion encodes `/`, so only the whole value counts as a
/// segment there.
fn has_dot_segment(value: &str, reserved: bool) -> bool {
    let is_dots = |segment: &str| segment == "." || segment == "..";
    if reserved {
        value.split('/').any(is_dots)
    } else {
        is_dots(value)
    }
}

/// Percent-encode a value for simple or reserved expansion
pub fn encode(value: &str, reserved: bool) -> String {
    let set = if reserved { RESERVED } else { SIMPLE };
    utf8_percent_encode(value, set).to_string()
}

/// Check if a string still contains placeholders
pub fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(s)
}

/// Extract all placeholders from a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|cap| Placeholder {
            name: cap[2].to_string(),
            reserved: !cap[1].is_empty(),
        })
        .collect()
}
