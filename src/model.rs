//! Reporting API resources
//!
//! Wire representations of the resources returned by the reporting
//! service. Only the commonly used fields are modelled; unknown fields are
//! ignored on decode.

use crate::pagination::Page;
use crate::types::ResponseType;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A decoded response with a known response type tag
pub trait ApiResource: DeserializeOwned {
    /// Tag of the operation response this type decodes
    const RESPONSE_TYPE: ResponseType;
}

/// A list response carrying one page of items and a continuation token
pub trait ListResponse: ApiResource {
    /// Item type of the page
    type Item;

    /// Split into a page
    fn into_page(self) -> Page<Self::Item>;
}

// ============================================================================
// Resources
// ============================================================================

/// A reporting job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<DateTime<Utc>>,
    /// System-managed jobs cannot be modified or deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_managed: Option<bool>,
}

impl Job {
    /// A new job for the given report type, ready to be created
    pub fn for_report_type(report_type_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            report_type_id: Some(report_type_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl ApiResource for Job {
    const RESPONSE_TYPE: ResponseType = ResponseType::Job;
}

/// A report generated by a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub job_expire_time: Option<DateTime<Utc>>,
    /// URL to fetch the report data from through `media.download`
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ApiResource for Report {
    const RESPONSE_TYPE: ResponseType = ResponseType::Report;
}

/// A report type that jobs can be created for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportType {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub deprecate_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub system_managed: Option<bool>,
}

/// Media metadata returned by `media.download` without `alt=media`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub resource_name: Option<String>,
}

impl ApiResource for Media {
    const RESPONSE_TYPE: ResponseType = ResponseType::Media;
}

/// Empty response body (e.g. from `jobs.delete`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

impl ApiResource for Empty {
    const RESPONSE_TYPE: ResponseType = ResponseType::Empty;
}

// ============================================================================
// List Responses
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ApiResource for ListJobsResponse {
    const RESPONSE_TYPE: ResponseType = ResponseType::ListJobs;
}

impl ListResponse for ListJobsResponse {
    type Item = Job;

    fn into_page(self) -> Page<Job> {
        Page::new(self.jobs, self.next_page_token)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReportsResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ApiResource for ListReportsResponse {
    const RESPONSE_TYPE: ResponseType = ResponseType::ListReports;
}

impl ListResponse for ListReportsResponse {
    type Item = Report;

    fn into_page(self) -> Page<Report> {
        Page::new(self.reports, self.next_page_token)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReportTypesResponse {
    #[serde(default)]
    pub report_types: Vec<ReportType>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ApiResource for ListReportTypesResponse {
    const RESPONSE_TYPE: ResponseType = ResponseType::ListReportTypes;
}

impl ListResponse for ListReportTypesResponse {
    type Item = ReportType;

    fn into_page(self) -> Page<ReportType> {
        Page::new(self.report_types, self.next_page_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_decode() {
        let job: Job = serde_json::from_value(json!({
            "id": "job-1",
            "reportTypeId": "channel_basic_a2",
            "name": "daily",
            "createTime": "2024-03-01T10:00:00Z",
            "systemManaged": false,
            "somethingNew": 1
        }))
        .unwrap();

        assert_eq!(job.id.as_deref(), Some("job-1"));
        assert_eq!(job.report_type_id.as_deref(), Some("channel_basic_a2"));
        assert_eq!(job.system_managed, Some(false));
        assert!(job.create_time.is_some());
        assert!(job.expire_time.is_none());
    }

    #[test]
    fn test_job_create_body_skips_unset_fields() {
        let job = Job::for_report_type("channel_basic_a2", "daily");
        let body = serde_json::to_value(&job).unwrap();
        assert_eq!(body, json!({"reportTypeId": "channel_basic_a2", "name": "daily"}));
    }

    #[test]
    fn test_list_response_into_page() {
        let response: ListReportsResponse = serde_json::from_value(json!({
            "reports": [{"id": "r1"}, {"id": "r2"}],
            "nextPageToken": "tok"
        }))
        .unwrap();

        let page = response.into_page();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_list_response_missing_items() {
        let response: ListReportTypesResponse = serde_json::from_value(json!({})).unwrap();
        let page = response.into_page();
        assert!(page.items.is_empty());
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_empty_decode() {
        let _: Empty = serde_json::from_value(json!({})).unwrap();
    }
}
