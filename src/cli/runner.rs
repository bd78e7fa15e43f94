//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, JobsCommand, MediaCommand, OutputFormat, ReportTypesCommand, ReportsCommand,
};
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::model::{Job, ListResponse};
use crate::pagination::Paginator;
use crate::service::{resource_name_from_download_url, ReportFilter, ReportingService};
use crate::transport::Transport;
use bytes::Bytes;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// JSON documents, printed one per line
    Records(Vec<Value>),
    /// Raw bytes written to stdout
    Data(Bytes),
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured service
    pub async fn run(&self) -> Result<()> {
        let config = ServiceConfig::load(self.cli.config.as_deref())?;
        let service = self.configure(ReportingService::from_config(config)?);

        let start = Instant::now();
        let output = self.execute(&service).await?;
        debug!(elapsed_ms = start.elapsed().as_millis(), "Command finished");

        self.emit(&output)
    }

    /// Apply the global flags to a service
    pub fn configure<T: Transport>(&self, mut service: ReportingService<T>) -> ReportingService<T> {
        if let Some(owner) = &self.cli.on_behalf_of {
            service = service.on_behalf_of(owner.clone());
        }
        if let Some(size) = self.cli.page_size.and_then(NonZeroU32::new) {
            service = service.with_page_size(size);
        }
        service
    }

    /// Execute the command and collect its output
    pub async fn execute<T: Transport>(&self, service: &ReportingService<T>) -> Result<Output> {
        match &self.cli.command {
            Commands::Jobs { command } => self.jobs(service, command).await,
            Commands::Reports { command } => self.reports(service, command).await,
            Commands::ReportTypes { command } => match command {
                ReportTypesCommand::List {
                    include_system_managed,
                } => {
                    let include = include_system_managed.then_some(true);
                    let paginator = service.list_report_types(include)?;
                    self.drain(paginator).await
                }
            },
            Commands::Media { command } => self.media(service, command).await,
        }
    }

    async fn jobs<T: Transport>(
        &self,
        service: &ReportingService<T>,
        command: &JobsCommand,
    ) -> Result<Output> {
        match command {
            JobsCommand::List {
                include_system_managed,
            } => {
                let paginator = service.list_jobs(include_system_managed.then_some(true))?;
                self.drain(paginator).await
            }
            JobsCommand::Get { job_id } => one(&service.get_job(job_id).await?),
            JobsCommand::Create { report_type, name } => {
                let job = Job::for_report_type(report_type.as_str(), name.as_str());
                let created = service.create_job(&job).await?;
                info!(job_id = ?created.id, report_type = %report_type, "Created job");
                one(&created)
            }
            JobsCommand::Delete { job_id } => {
                service.delete_job(job_id).await?;
                info!(job_id = %job_id, "Deleted job");
                Ok(Output::Records(vec![json!({ "deleted": job_id })]))
            }
        }
    }

    async fn reports<T: Transport>(
        &self,
        service: &ReportingService<T>,
        command: &ReportsCommand,
    ) -> Result<Output> {
        match command {
            ReportsCommand::List {
                job_id,
                created_after,
                start_time_at_or_after,
                start_time_before,
            } => {
                let filter = ReportFilter {
                    created_after: *created_after,
                    start_time_at_or_after: *start_time_at_or_after,
                    start_time_before: *start_time_before,
                };
                let paginator = service.list_reports(job_id, &filter)?;
                self.drain(paginator).await
            }
            ReportsCommand::Get { job_id, report_id } => {
                one(&service.get_report(job_id, report_id).await?)
            }
        }
    }

    async fn media<T: Transport>(
        &self,
        service: &ReportingService<T>,
        command: &MediaCommand,
    ) -> Result<Output> {
        let MediaCommand::Download {
            resource,
            output,
            metadata,
        } = command;

        let resource_name = if resource.starts_with("http://") || resource.starts_with("https://")
        {
            resource_name_from_download_url(resource)?
        } else {
            resource.clone()
        };

        if *metadata {
            return one(&service.get_media(&resource_name).await?);
        }

        let data = service.download_media(&resource_name).await?;
        match output {
            Some(path) => write_file(path, &data, &resource_name),
            None => Ok(Output::Data(data)),
        }
    }

    /// Collect a paginated sequence, honouring `--max-items`
    async fn drain<R, T>(&self, mut paginator: Paginator<R, T>) -> Result<Output>
    where
        R: ListResponse,
        R::Item: Serialize,
        T: Transport,
    {
        let items = match self.cli.max_items {
            Some(max) => {
                let items = paginator.collect_up_to(max).await?;
                paginator.stop();
                items
            }
            None => paginator.collect_all().await?,
        };

        debug!(count = items.len(), "Collected items");
        let records = items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Output::Records(records))
    }

    /// Print the output in the selected format
    fn emit(&self, output: &Output) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match output {
            Output::Records(records) => {
                for record in records {
                    let line = match self.cli.format {
                        OutputFormat::Json => serde_json::to_string(record)?,
                        OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
                    };
                    writeln!(out, "{line}")?;
                }
            }
            Output::Data(data) => out.write_all(data)?,
        }
        out.flush()?;
        Ok(())
    }
}

fn one<S: Serialize>(value: &S) -> Result<Output> {
    Ok(Output::Records(vec![serde_json::to_value(value)?]))
}

fn write_file(path: &Path, data: &Bytes, resource_name: &str) -> Result<Output> {
    std::fs::write(path, data).map_err(|e| {
        Error::Other(format!("Failed to write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), bytes = data.len(), "Wrote report data");
    Ok(Output::Records(vec![json!({
        "resourceName": resource_name,
        "path": path.display().to_string(),
        "bytes": data.len(),
    })]))
}
