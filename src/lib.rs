//! Sales report generation: load a transaction sheet, filter it by date,
//! compute revenue metrics and write a formatted four-sheet workbook.

pub mod config;
pub mod engine;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod presentation;
pub mod report;
pub mod types;

pub use config::{Invocation, ReportConfig};
pub use engine::{GeneratedReport, JobEvent, JobState, Orchestrator, ReportJob, ReportRequest, Stage};
pub use errors::ReportError;
pub use models::Summary;
