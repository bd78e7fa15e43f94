//! Reporting service facade
//!
//! [`ReportingService`] binds a [`Transport`] to a [`ServiceConfig`] and
//! exposes one typed method per API operation. List operations return a
//! [`Paginator`] that fetches pages lazily.
//!
//! # Example
//!
//! ```no_run
//! use yt_reporting::{ReportingService, ServiceConfig};
//!
//! # async fn run() -> yt_reporting::Result<()> {
//! let service = ReportingService::from_config(ServiceConfig::load(None)?)?;
//! let mut jobs = service.list_jobs(None)?;
//! while let Some(job) = jobs.next().await? {
//!     println!("{:?}", job.id);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::model::{
    ApiResource, Empty, Job, ListJobsResponse, ListReportTypesResponse, ListReportsResponse,
    ListResponse, Media, Report,
};
use crate::pagination::{Page, Paginator};
use crate::query::{self, QueryBuilder, ON_BEHALF_OF_CONTENT_OWNER, PAGE_SIZE};
use crate::request::Request;
use crate::transport::Transport;
use crate::types::ResponseType;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Path segment preceding the resource name in report download URLs
const MEDIA_PATH: &str = "/v1/media/";

/// Time filters for `jobs.reports.list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub created_after: Option<DateTime<Utc>>,
    pub start_time_at_or_after: Option<DateTime<Utc>>,
    pub start_time_before: Option<DateTime<Utc>>,
}

impl ReportFilter {
    fn apply(&self, mut builder: QueryBuilder) -> QueryBuilder {
        if let Some(at) = self.created_after {
            builder = builder.created_after(at);
        }
        if let Some(at) = self.start_time_at_or_after {
            builder = builder.start_time_at_or_after(at);
        }
        if let Some(at) = self.start_time_before {
            builder = builder.start_time_before(at);
        }
        builder
    }
}

/// Typed client for the reporting API
pub struct ReportingService<T: Transport = HttpTransport> {
    transport: Arc<T>,
    config: ServiceConfig,
    content_owner: Option<String>,
    page_size: Option<u32>,
}

impl ReportingService<HttpTransport> {
    /// Create a service using the HTTP transport described by `config`
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let transport = config.http_transport()?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> ReportingService<T> {
    /// Create a service over an explicit transport
    pub fn new(transport: T, config: ServiceConfig) -> Self {
        Self::with_shared_transport(Arc::new(transport), config)
    }

    /// Create a service over a shared transport
    pub fn with_shared_transport(transport: Arc<T>, config: ServiceConfig) -> Self {
        let page_size = config.default_page_size;
        Self {
            transport,
            config,
            content_owner: None,
            page_size,
        }
    }

    /// Act on behalf of a content owner for every operation that accepts it
    #[must_use]
    pub fn on_behalf_of(mut self, owner: impl Into<String>) -> Self {
        self.content_owner = Some(owner.into());
        self
    }

    /// Page size hint for list operations, overriding the config default
    #[must_use]
    pub fn with_page_size(mut self, size: NonZeroU32) -> Self {
        self.page_size = Some(size.get());
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    pub fn content_owner(&self) -> Option<&str> {
        self.content_owner.as_deref()
    }

    // ========================================================================
    // Generic execution
    // ========================================================================

    /// Execute a request and decode its response as `R`
    ///
    /// Fails without a network call when the request's response type is
    /// not the one `R` decodes.
    pub async fn execute<R: ApiResource>(&self, request: &Request) -> Result<R> {
        request.expect_response(R::RESPONSE_TYPE)?;
        debug!(operation = %request.operation_id(), path = %request.path(), "Executing request");
        let response = self.transport.execute(request).await?;
        response.decode()
    }

    /// Build and execute a query, decoding the response as `R`
    pub async fn run<R: ApiResource>(&self, builder: QueryBuilder) -> Result<R> {
        let request = self.scoped(builder).build()?;
        self.execute(&request).await
    }

    /// Auto-paginate a list query
    ///
    /// A `pageSize` on the query wins over the service's page size hint.
    pub fn paginate<R: ListResponse>(&self, builder: QueryBuilder) -> Result<Paginator<R, Arc<T>>> {
        let request = self.scoped(builder).build()?;
        let hint = if request.param(PAGE_SIZE).is_some() {
            None
        } else {
            self.page_size
        };
        Paginator::new(Arc::clone(&self.transport), request, hint)
    }

    /// Fetch a single page of a list query
    pub async fn fetch_page<R: ListResponse>(&self, builder: QueryBuilder) -> Result<Page<R::Item>> {
        let mut paginator = self.paginate::<R>(builder)?;
        let page = paginator.next_page().await?;
        Ok(page.unwrap_or_else(|| Page::last(Vec::new())))
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    /// `jobs.create`
    pub async fn create_job(&self, job: &Job) -> Result<Job> {
        self.run(query::jobs_create(job)?).await
    }

    /// `jobs.get`
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        self.run(query::jobs_get(job_id)).await
    }

    /// `jobs.delete`
    pub async fn delete_job(&self, job_id: &str) -> Result<()> {
        self.run::<Empty>(query::jobs_delete(job_id)).await?;
        Ok(())
    }

    /// `jobs.list`
    ///
    /// `includeSystemManaged` is only sent when given.
    pub fn list_jobs(
        &self,
        include_system_managed: Option<bool>,
    ) -> Result<Paginator<ListJobsResponse, Arc<T>>> {
        let mut builder = query::jobs_list();
        if let Some(include) = include_system_managed {
            builder = builder.include_system_managed(include);
        }
        self.paginate(builder)
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// `jobs.reports.get`
    pub async fn get_report(&self, job_id: &str, report_id: &str) -> Result<Report> {
        self.run(query::jobs_reports_get(job_id, report_id)).await
    }

    /// `jobs.reports.list`
    pub fn list_reports(
        &self,
        job_id: &str,
        filter: &ReportFilter,
    ) -> Result<Paginator<ListReportsResponse, Arc<T>>> {
        self.paginate(filter.apply(query::jobs_reports_list(job_id)))
    }

    // ========================================================================
    // Report types
    // ========================================================================

    /// `reportTypes.list`
    pub fn list_report_types(
        &self,
        include_system_managed: Option<bool>,
    ) -> Result<Paginator<ListReportTypesResponse, Arc<T>>> {
        let mut builder = query::report_types_list();
        if let Some(include) = include_system_managed {
            builder = builder.include_system_managed(include);
        }
        self.paginate(builder)
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// `media.download` metadata
    pub async fn get_media(&self, resource_name: &str) -> Result<Media> {
        self.run(query::media_download(resource_name)).await
    }

    /// `media.download` with `alt=media`: the raw report bytes
    pub async fn download_media(&self, resource_name: &str) -> Result<Bytes> {
        let request = query::media_download_data(resource_name).build()?;
        request.expect_response(ResponseType::MediaData)?;
        debug!(resource_name, "Downloading media");
        let response = self.transport.execute(&request).await?;
        Ok(response.into_bytes())
    }

    /// Download the data of a report through its `downloadUrl`
    pub async fn download_report(&self, report: &Report) -> Result<Bytes> {
        let url = report.download_url.as_deref().ok_or_else(|| {
            crate::Error::invalid_param("downloadUrl", "report has no download URL")
        })?;
        let resource_name = resource_name_from_download_url(url)?;
        self.download_media(&resource_name).await
    }

    /// Add the content owner to operations that accept it
    fn scoped(&self, builder: QueryBuilder) -> QueryBuilder {
        match &self.content_owner {
            Some(owner)
                if builder
                    .operation()
                    .parameter(ON_BEHALF_OF_CONTENT_OWNER)
                    .is_some() =>
            {
                builder.on_behalf_of_content_owner(owner.clone())
            }
            _ => builder,
        }
    }
}

impl<T: Transport> Clone for ReportingService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
            content_owner: self.content_owner.clone(),
            page_size: self.page_size,
        }
    }
}

impl<T: Transport> std::fmt::Debug for ReportingService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportingService")
            .field("base_url", &self.config.base_url)
            .field("content_owner", &self.content_owner)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Extract the media resource name from a report `downloadUrl`
///
/// The resource name is the path after `/v1/media/`, percent-decoded,
/// without the query string.
pub fn resource_name_from_download_url(download_url: &str) -> Result<String> {
    let url = url::Url::parse(download_url)?;
    let path = url.path();
    let encoded = path.find(MEDIA_PATH).map(|i| &path[i + MEDIA_PATH.len()..]);

    match encoded {
        Some(name) if !name.is_empty() => {
            let decoded = percent_encoding::percent_decode_str(name)
                .decode_utf8()
                .map_err(|e| crate::Error::invalid_param("downloadUrl", e.to_string()))?;
            Ok(decoded.into_owned())
        }
        _ => Err(crate::Error::invalid_param(
            "downloadUrl",
            format!("'{download_url}' is not a media URL"),
        )),
    }
}
