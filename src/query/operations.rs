//! Operation metadata table
//!
//! One entry per reporting API method: identifier, HTTP method, path
//! template, declared parameters and response type. The query builder
//! validates caller input against these entries.

use crate::request::Parameter;
use crate::types::{Method, ResponseType};

/// Partial-response selector accepted by every operation
pub const FIELDS: &str = "fields";

/// Identity-delegation parameter, forwarded verbatim
pub const ON_BEHALF_OF_CONTENT_OWNER: &str = "onBehalfOfContentOwner";

/// Continuation token sent on list requests
pub const PAGE_TOKEN: &str = "pageToken";

/// Requested page size on list requests
pub const PAGE_SIZE: &str = "pageSize";

const FIELDS_PARAM: Parameter = Parameter::query(FIELDS);

/// Metadata of one API operation
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    /// Method identifier, e.g. `youtubereporting.jobs.list`
    pub id: &'static str,
    pub method: Method,
    pub path_template: &'static str,
    /// Declared parameters, in declaration order
    pub params: &'static [Parameter],
    /// Query pairs always sent with this operation
    pub fixed_query: &'static [(&'static str, &'static str)],
    pub response_type: ResponseType,
}

impl Operation {
    /// Look up a declared parameter, including the common `fields` selector
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .or_else(|| (name == FIELDS).then_some(&FIELDS_PARAM))
    }

    /// List operation that accepts a continuation token
    pub fn is_paged(&self) -> bool {
        self.response_type.is_list() && self.params.iter().any(|p| p.name == PAGE_TOKEN)
    }
}

pub static JOBS_CREATE: Operation = Operation {
    id: "youtubereporting.jobs.create",
    method: Method::POST,
    path_template: "v1/jobs",
    params: &[
        Parameter::body("job"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
    ],
    fixed_query: &[],
    response_type: ResponseType::Job,
};

pub static JOBS_DELETE: Operation = Operation {
    id: "youtubereporting.jobs.delete",
    method: Method::DELETE,
    path_template: "v1/jobs/{jobId}",
    params: &[
        Parameter::path("jobId"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
    ],
    fixed_query: &[],
    response_type: ResponseType::Empty,
};

pub static JOBS_GET: Operation = Operation {
    id: "youtubereporting.jobs.get",
    method: Method::GET,
    path_template: "v1/jobs/{jobId}",
    params: &[
        Parameter::path("jobId"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
    ],
    fixed_query: &[],
    response_type: ResponseType::Job,
};

pub static JOBS_LIST: Operation = Operation {
    id: "youtubereporting.jobs.list",
    method: Method::GET,
    path_template: "v1/jobs",
    params: &[
        Parameter::query("includeSystemManaged"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
        Parameter::query(PAGE_SIZE),
        Parameter::query(PAGE_TOKEN),
    ],
    fixed_query: &[],
    response_type: ResponseType::ListJobs,
};

pub static JOBS_REPORTS_GET: Operation = Operation {
    id: "youtubereporting.jobs.reports.get",
    method: Method::GET,
    path_template: "v1/jobs/{jobId}/reports/{reportId}",
    params: &[
        Parameter::path("jobId"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
        Parameter::path("reportId"),
    ],
    fixed_query: &[],
    response_type: ResponseType::Report,
};

pub static JOBS_REPORTS_LIST: Operation = Operation {
    id: "youtubereporting.jobs.reports.list",
    method: Method::GET,
    path_template: "v1/jobs/{jobId}/reports",
    params: &[
        Parameter::query("createdAfter"),
        Parameter::path("jobId"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
        Parameter::query(PAGE_SIZE),
        Parameter::query(PAGE_TOKEN),
        Parameter::query("startTimeAtOrAfter"),
        Parameter::query("startTimeBefore"),
    ],
    fixed_query: &[],
    response_type: ResponseType::ListReports,
};

pub static MEDIA_DOWNLOAD: Operation = Operation {
    id: "youtubereporting.media.download",
    method: Method::GET,
    path_template: "v1/media/{+resourceName}",
    params: &[Parameter::path("resourceName")],
    fixed_query: &[],
    response_type: ResponseType::Media,
};

/// `media.download` fetching the raw report data instead of metadata
pub static MEDIA_DOWNLOAD_DATA: Operation = Operation {
    id: "youtubereporting.media.download",
    method: Method::GET,
    path_template: "v1/media/{+resourceName}",
    params: &[Parameter::path("resourceName")],
    fixed_query: &[("alt", "media")],
    response_type: ResponseType::MediaData,
};

pub static REPORT_TYPES_LIST: Operation = Operation {
    id: "youtubereporting.reportTypes.list",
    method: Method::GET,
    path_template: "v1/reportTypes",
    params: &[
        Parameter::query("includeSystemManaged"),
        Parameter::query(ON_BEHALF_OF_CONTENT_OWNER),
        Parameter::query(PAGE_SIZE),
        Parameter::query(PAGE_TOKEN),
    ],
    fixed_query: &[],
    response_type: ResponseType::ListReportTypes,
};

/// Every operation in the table
pub static ALL: [&Operation; 9] = [
    &JOBS_CREATE,
    &JOBS_DELETE,
    &JOBS_GET,
    &JOBS_LIST,
    &JOBS_REPORTS_GET,
    &JOBS_REPORTS_LIST,
    &MEDIA_DOWNLOAD,
    &MEDIA_DOWNLOAD_DATA,
    &REPORT_TYPES_LIST,
];

/// Find an operation by identifier
///
/// `media.download` resolves to the metadata variant.
pub fn find(id: &str) -> Option<&'static Operation> {
    ALL.iter().copied().find(|op| op.id == id)
}
