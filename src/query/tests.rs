//! Tests for the query module

use super::operations::{self, ALL};
use super::*;
use crate::error::Error;
use crate::model::Job;
use crate::template::has_placeholders;
use crate::types::{Method, ParamValue, ResponseType};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn query_names(request: &crate::request::Request) -> Vec<String> {
    request.query_pairs().into_iter().map(|(k, _)| k).collect()
}

// ============================================================================
// Operation Table Tests
// ============================================================================

#[test]
fn test_find_operation() {
    let op = operations::find("youtubereporting.jobs.list").unwrap();
    assert_eq!(op.method, Method::GET);
    assert_eq!(op.path_template, "v1/jobs");
    assert!(op.is_paged());

    let media = operations::find("youtubereporting.media.download").unwrap();
    assert_eq!(media.response_type, ResponseType::Media);

    assert!(operations::find("youtubereporting.channels.list").is_none());
}

#[test]
fn test_paged_operations() {
    let paged: Vec<&str> = ALL.iter().filter(|op| op.is_paged()).map(|op| op.id).collect();
    assert_eq!(
        paged,
        vec![
            "youtubereporting.jobs.list",
            "youtubereporting.jobs.reports.list",
            "youtubereporting.reportTypes.list",
        ]
    );
}

#[test]
fn test_fields_is_accepted_everywhere() {
    for op in ALL {
        assert!(op.parameter(FIELDS).is_some(), "{} rejects fields", op.id);
    }
}

// ============================================================================
// Build Tests
// ============================================================================

#[test]
fn test_build_jobs_get() {
    let request = jobs_get("job-1").build().unwrap();
    assert_eq!(request.operation_id(), "youtubereporting.jobs.get");
    assert_eq!(request.method(), Method::GET);
    assert_eq!(request.path(), "v1/jobs/job-1");
    assert_eq!(request.response_type(), ResponseType::Job);
    assert!(request.query_pairs().is_empty());
}

#[test]
fn test_build_reports_get() {
    let request = jobs_reports_get("j/1", "r 2").build().unwrap();
    assert_eq!(request.path(), "v1/jobs/j%2F1/reports/r%202");
}

#[test]
fn test_build_never_injects_defaults() {
    let request = jobs_list().build().unwrap();
    assert!(request.query_pairs().is_empty());
    assert!(request.param(PAGE_SIZE).is_none());
}

#[test]
fn test_build_query_params_in_declaration_order() {
    let request = jobs_reports_list("j1")
        .start_time_before(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        .page_size(25)
        .created_after(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .on_behalf_of_content_owner("owner")
        .build()
        .unwrap();

    assert_eq!(
        query_names(&request),
        vec![
            "createdAfter",
            "onBehalfOfContentOwner",
            "pageSize",
            "startTimeBefore"
        ]
    );
    assert_eq!(
        request.param("createdAfter"),
        Some(&ParamValue::from("2024-01-01T00:00:00Z"))
    );
}

#[test]
fn test_build_forwards_identity_delegation_verbatim() {
    let owner = "  weird value/with?chars&=  ";
    let request = jobs_list().on_behalf_of_content_owner(owner).build().unwrap();
    assert_eq!(
        request.query_pairs(),
        vec![(ON_BEHALF_OF_CONTENT_OWNER.to_string(), owner.to_string())]
    );
}

#[test]
fn test_build_fields_comes_after_declared_params() {
    let request = report_types_list()
        .fields("reportTypes(id,name),nextPageToken")
        .include_system_managed(true)
        .build()
        .unwrap();
    assert_eq!(query_names(&request), vec!["includeSystemManaged", "fields"]);
}

#[test]
fn test_build_jobs_create_body() {
    let job = Job::for_report_type("channel_basic_a2", "daily");
    let request = jobs_create(&job).unwrap().build().unwrap();

    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.path(), "v1/jobs");
    assert_eq!(
        request.body(),
        Some(json!({"reportTypeId": "channel_basic_a2", "name": "daily"}))
    );
}

#[test]
fn test_build_media_download_variants() {
    let meta = media_download("CHANNEL/jobs/1/reports/2").build().unwrap();
    assert_eq!(meta.path(), "v1/media/CHANNEL/jobs/1/reports/2");
    assert!(meta.query_pairs().is_empty());
    assert_eq!(meta.response_type(), ResponseType::Media);

    let data = media_download_data("CHANNEL/jobs/1/reports/2")
        .build()
        .unwrap();
    assert_eq!(data.path(), meta.path());
    assert_eq!(
        data.query_pairs(),
        vec![("alt".to_string(), "media".to_string())]
    );
    assert_eq!(data.response_type(), ResponseType::MediaData);
}

#[test]
fn test_param_replaces_earlier_value() {
    let request = jobs_list().page_size(10).page_size(20).build().unwrap();
    assert_eq!(request.param(PAGE_SIZE), Some(&ParamValue::Int(20)));
    assert_eq!(request.query_pairs().len(), 1);
}

#[test]
fn test_build_is_pure() {
    let builder = jobs_get("job-1").fields("id");
    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test_case(QueryBuilder::new(&operations::JOBS_GET), "jobId" ; "jobs get")]
#[test_case(QueryBuilder::new(&operations::JOBS_DELETE), "jobId" ; "jobs delete")]
#[test_case(QueryBuilder::new(&operations::JOBS_CREATE), "job" ; "jobs create")]
#[test_case(QueryBuilder::new(&operations::JOBS_REPORTS_LIST), "jobId" ; "reports list")]
#[test_case(QueryBuilder::new(&operations::JOBS_REPORTS_GET).param("jobId", "j"), "reportId" ; "reports get")]
#[test_case(QueryBuilder::new(&operations::MEDIA_DOWNLOAD), "resourceName" ; "media download")]
fn test_missing_required_param(builder: QueryBuilder, expected: &str) {
    let err = builder.build().unwrap_err();
    assert!(err.is_validation());
    match err {
        Error::MissingParameter { name } => assert_eq!(name, expected),
        other => panic!("Expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn test_empty_required_param_is_missing() {
    let err = jobs_get("").build().unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name } if name == "jobId"));
}

#[test]
fn test_unknown_param_rejected() {
    let err = jobs_get("job-1").page_size(10).build().unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownParameter { ref name, .. } if name == PAGE_SIZE
    ));
}

#[test_case(ParamValue::Int(0) ; "zero")]
#[test_case(ParamValue::Int(-5) ; "negative")]
#[test_case(ParamValue::from("ten") ; "not a number")]
#[test_case(ParamValue::from(true) ; "boolean")]
fn test_invalid_page_size(value: ParamValue) {
    let err = jobs_list().param(PAGE_SIZE, value).build().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == PAGE_SIZE));
}

#[test]
fn test_page_size_as_numeric_string() {
    let request = jobs_list().param(PAGE_SIZE, "15").build().unwrap();
    assert_eq!(
        request.query_pairs(),
        vec![(PAGE_SIZE.to_string(), "15".to_string())]
    );
}

#[test]
fn test_built_paths_have_no_placeholders() {
    let values = ["plain", "{jobId}", "a/b", "{+resourceName}", "ü ?#"];
    for op in ALL {
        for value in values {
            let mut builder = QueryBuilder::new(op);
            for param in op.params {
                if param.required {
                    builder = builder.param(param.name, value);
                }
            }
            let request = builder.build().unwrap();
            assert!(
                !has_placeholders(request.path()),
                "{} left a placeholder in {}",
                op.id,
                request.path()
            );
        }
    }
}
