//! Query builder
//!
//! Collects caller-supplied parameter values for one operation and
//! validates them into a [`Request`]. Building is pure: no defaults are
//! injected and nothing is sent.

use super::operations::{
    Operation, FIELDS, JOBS_CREATE, JOBS_DELETE, JOBS_GET, JOBS_LIST, JOBS_REPORTS_GET,
    JOBS_REPORTS_LIST, MEDIA_DOWNLOAD, MEDIA_DOWNLOAD_DATA, ON_BEHALF_OF_CONTENT_OWNER, PAGE_SIZE,
    PAGE_TOKEN, REPORT_TYPES_LIST,
};
use crate::error::{Error, Result};
use crate::model::Job;
use crate::request::{BoundParam, Request};
use crate::types::{ParamKind, ParamValue};
use chrono::{DateTime, SecondsFormat, Utc};

/// Builder for a single operation's request
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    operation: &'static Operation,
    values: Vec<(String, ParamValue)>,
}

impl QueryBuilder {
    /// Start a query for the given operation
    pub fn new(operation: &'static Operation) -> Self {
        Self {
            operation,
            values: Vec::new(),
        }
    }

    /// The operation this query targets
    pub fn operation(&self) -> &'static Operation {
        self.operation
    }

    /// Set a parameter value, replacing any earlier value for the same name
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Selector specifying which fields to include in a partial response
    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        self.param(FIELDS, fields.into())
    }

    /// Act on behalf of a content owner (forwarded verbatim)
    #[must_use]
    pub fn on_behalf_of_content_owner(self, owner: impl Into<String>) -> Self {
        self.param(ON_BEHALF_OF_CONTENT_OWNER, owner.into())
    }

    #[must_use]
    pub fn page_size(self, size: u32) -> Self {
        self.param(PAGE_SIZE, size)
    }

    #[must_use]
    pub fn page_token(self, token: impl Into<String>) -> Self {
        self.param(PAGE_TOKEN, token.into())
    }

    /// Also return system-managed jobs or report types
    #[must_use]
    pub fn include_system_managed(self, include: bool) -> Self {
        self.param("includeSystemManaged", include)
    }

    /// Only reports created after this instant
    #[must_use]
    pub fn created_after(self, at: DateTime<Utc>) -> Self {
        self.param("createdAfter", rfc3339(at))
    }

    /// Only reports whose start time is at or after this instant
    #[must_use]
    pub fn start_time_at_or_after(self, at: DateTime<Utc>) -> Self {
        self.param("startTimeAtOrAfter", rfc3339(at))
    }

    /// Only reports whose start time is before this instant
    #[must_use]
    pub fn start_time_before(self, at: DateTime<Utc>) -> Self {
        self.param("startTimeBefore", rfc3339(at))
    }

    /// Validate and build the request
    pub fn build(&self) -> Result<Request> {
        build(self.operation, &self.values)
    }
}

/// Validate `values` against `operation` and produce a request
///
/// Parameters are bound in declaration order, followed by `fields` and the
/// operation's fixed query pairs. Optional parameters the caller did not
/// supply are left out.
pub fn build(operation: &'static Operation, values: &[(String, ParamValue)]) -> Result<Request> {
    for (name, value) in values {
        if operation.parameter(name).is_none() {
            return Err(Error::unknown_param(operation.id, name.as_str()));
        }
        if name == PAGE_SIZE {
            validate_page_size(value)?;
        }
    }

    let lookup = |name: &str| values.iter().find(|(n, _)| n == name).map(|(_, v)| v);

    let mut bound = Vec::with_capacity(values.len() + operation.fixed_query.len());
    for param in operation.params {
        match lookup(param.name) {
            Some(value) if param.required && value.is_empty() => {
                return Err(Error::missing_param(param.name));
            }
            Some(value) => bound.push(BoundParam::new(param.name, param.kind, value.clone())),
            None if param.required => return Err(Error::missing_param(param.name)),
            None => {}
        }
    }

    if let Some(fields) = lookup(FIELDS) {
        bound.push(BoundParam::new(FIELDS, ParamKind::Query, fields.clone()));
    }

    for (name, value) in operation.fixed_query {
        bound.push(BoundParam::new(*name, ParamKind::Query, *value));
    }

    Request::new(
        operation.id,
        operation.method,
        operation.path_template,
        bound,
        operation.response_type,
    )
}

fn validate_page_size(value: &ParamValue) -> Result<()> {
    match value {
        ParamValue::Int(n) if *n > 0 => Ok(()),
        ParamValue::String(s) if s.parse::<u32>().is_ok_and(|n| n > 0) => Ok(()),
        _ => Err(Error::invalid_param(
            PAGE_SIZE,
            format!("expected a positive integer, got '{}'", value.render()),
        )),
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// ============================================================================
// Per-operation constructors
// ============================================================================

/// `jobs.create`: create a reporting job
pub fn jobs_create(job: &Job) -> Result<QueryBuilder> {
    let body = serde_json::to_value(job)?;
    Ok(QueryBuilder::new(&JOBS_CREATE).param("job", body))
}

/// `jobs.delete`: delete a job
pub fn jobs_delete(job_id: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&JOBS_DELETE).param("jobId", job_id.into())
}

/// `jobs.get`: fetch a job
pub fn jobs_get(job_id: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&JOBS_GET).param("jobId", job_id.into())
}

/// `jobs.list`: list jobs (paged)
pub fn jobs_list() -> QueryBuilder {
    QueryBuilder::new(&JOBS_LIST)
}

/// `jobs.reports.get`: fetch the metadata of one report
pub fn jobs_reports_get(job_id: impl Into<String>, report_id: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&JOBS_REPORTS_GET)
        .param("jobId", job_id.into())
        .param("reportId", report_id.into())
}

/// `jobs.reports.list`: list reports created by a job (paged)
pub fn jobs_reports_list(job_id: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&JOBS_REPORTS_LIST).param("jobId", job_id.into())
}

/// `media.download`: fetch media metadata
pub fn media_download(resource_name: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&MEDIA_DOWNLOAD).param("resourceName", resource_name.into())
}

/// `media.download` with `alt=media`: fetch the raw report data
pub fn media_download_data(resource_name: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(&MEDIA_DOWNLOAD_DATA).param("resourceName", resource_name.into())
}

/// `reportTypes.list`: list report types (paged)
pub fn report_types_list() -> QueryBuilder {
    QueryBuilder::new(&REPORT_TYPES_LIST)
}
