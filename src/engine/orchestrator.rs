use std::fs::create_dir_all;
use std::path::PathBuf;

use tracing::info;

use crate::config::ReportConfig;
use crate::engine::Stage;
use crate::errors::ReportError;
use crate::ingest::load;
use crate::models::{Metrics, Summary};
use crate::pipeline::{compute, filter, validate};
use crate::report::ReportWriter;

/// What to read, where to write, and the optional date window.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReportRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub start: Option<String>,
    pub end: Option<String>
}

impl ReportRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            start: None,
            end: None
        }
    }

    pub fn with_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }
}

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub summary: Summary
}

/// Runs load, validate, filter, compute and write in sequence.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    writer: ReportWriter
}

impl Orchestrator {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            writer: ReportWriter::new(config)
        }
    }

    pub fn run(&self, request: &ReportRequest) -> Result<GeneratedReport, ReportError> {
        self.run_with_progress(request, |_| {})
    }

    /// Runs the pipeline, calling `progress` as each stage is reached.
    ///
    /// Stops at the first failure. The output file only appears once the whole
    /// report has been written.
    pub fn run_with_progress(&self, request: &ReportRequest, mut progress: impl FnMut(Stage)) -> Result<GeneratedReport, ReportError> {
        progress(Stage::Started);

        if !request.input.is_file() {
            return Err(ReportError::not_found(&request.input));
        }

        let table = load(&request.input)?;
        info!("Loaded {} rows from [{}]", table.len(), request.input.display());

        let validated = validate(table)?;
        let filtered = filter(validated, request.start.as_deref(), request.end.as_deref())?;
        info!("{} rows selected for the report", filtered.len());
        progress(Stage::Filtered);

        let Metrics { records, summary, per_seller, per_day } = compute(filtered)?;
        info!("Total revenue {} across {} sellers and {} days", summary.total_revenue, per_seller.len(), per_day.len());
        progress(Stage::Computed);

        if let Some(parent) = request.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            create_dir_all(parent).map_err(|error| ReportError::io(parent, error))?;
        }

        self.writer.write(&request.output, &records, &summary, &per_seller, &per_day)?;
        info!("Report written to [{}]", request.output.display());
        progress(Stage::Written);

        Ok(GeneratedReport {
            path: request.output.clone(),
            summary
        })
    }
}
