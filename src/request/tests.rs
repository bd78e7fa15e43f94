//! Tests for the request module

use super::*;
use crate::error::Error;
use crate::types::{Method, ParamKind, ParamValue, ResponseType};
use pretty_assertions::assert_eq;
use serde_json::json;

fn reports_list(job_id: &str) -> Request {
    Request::new(
        "youtubereporting.jobs.reports.list",
        Method::GET,
        "v1/jobs/{jobId}/reports",
        vec![
            BoundParam::new("jobId", ParamKind::Path, job_id),
            BoundParam::new("onBehalfOfContentOwner", ParamKind::Query, "owner-1"),
            BoundParam::new("createdAfter", ParamKind::Query, "2024-01-01T00:00:00Z"),
        ],
        ResponseType::ListReports,
    )
    .unwrap()
}

#[test]
fn test_parameter_constructors() {
    let p = Parameter::path("jobId");
    assert!(p.required);
    assert_eq!(p.kind, ParamKind::Path);

    let q = Parameter::query("pageSize");
    assert!(!q.required);
    assert_eq!(q.kind, ParamKind::Query);

    let b = Parameter::body("job");
    assert!(b.required);
    assert_eq!(b.kind, ParamKind::Body);
}

#[test]
fn test_request_expands_path() {
    let request = reports_list("job 1");
    assert_eq!(request.path(), "v1/jobs/job%201/reports");
    assert_eq!(request.path_template(), "v1/jobs/{jobId}/reports");
    assert_eq!(request.method(), Method::GET);
    assert_eq!(request.response_type(), ResponseType::ListReports);
}

#[test]
fn test_request_missing_path_param() {
    let err = Request::new(
        "youtubereporting.jobs.get",
        Method::GET,
        "v1/jobs/{jobId}",
        vec![],
        ResponseType::Job,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name } if name == "jobId"));
}

#[test]
fn test_request_empty_path_param_is_missing() {
    let err = Request::new(
        "youtubereporting.jobs.get",
        Method::GET,
        "v1/jobs/{jobId}",
        vec![BoundParam::new("jobId", ParamKind::Path, "")],
        ResponseType::Job,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name } if name == "jobId"));
}

#[test]
fn test_query_pairs_keep_declaration_order() {
    let request = reports_list("j1");
    assert_eq!(
        request.query_pairs(),
        vec![
            ("onBehalfOfContentOwner".to_string(), "owner-1".to_string()),
            ("createdAfter".to_string(), "2024-01-01T00:00:00Z".to_string()),
        ]
    );
}

#[test]
fn test_with_query_param_appends_then_replaces() {
    let request = reports_list("j1");

    let first = request.with_query_param("pageToken", "t1");
    assert_eq!(first.param("pageToken"), Some(&ParamValue::from("t1")));
    assert_eq!(first.query_pairs().last().unwrap().0, "pageToken");

    let second = first.with_query_param("pageToken", "t2");
    assert_eq!(second.param("pageToken"), Some(&ParamValue::from("t2")));
    assert_eq!(second.query_pairs().len(), first.query_pairs().len());

    // the template is untouched
    assert!(request.param("pageToken").is_none());
}

#[test]
fn test_without_query_param() {
    let request = reports_list("j1").with_query_param("pageToken", "t1");
    let stripped = request.without_query_param("pageToken");
    assert!(stripped.param("pageToken").is_none());
    assert_eq!(stripped.param("jobId"), Some(&ParamValue::from("j1")));
}

#[test]
fn test_body() {
    let request = Request::new(
        "youtubereporting.jobs.create",
        Method::POST,
        "v1/jobs",
        vec![BoundParam::new(
            "job",
            ParamKind::Body,
            json!({"reportTypeId": "channel_basic_a2"}),
        )],
        ResponseType::Job,
    )
    .unwrap();

    assert_eq!(request.body(), Some(json!({"reportTypeId": "channel_basic_a2"})));
    assert!(request.query_pairs().is_empty());
    assert!(reports_list("j1").body().is_none());
}

#[test]
fn test_expect_response() {
    let request = reports_list("j1");
    assert!(request.expect_response(ResponseType::ListReports).is_ok());

    let err = request.expect_response(ResponseType::ListJobs).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("ListReportsResponse"));
}
