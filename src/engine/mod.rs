mod job;
mod orchestrator;

pub use job::{JobEvent, JobState, ReportJob};
pub use orchestrator::{GeneratedReport, Orchestrator, ReportRequest};

/// Coarse milestones of a report run, in the order they are reached.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stage {
    Started,
    Filtered,
    Computed,
    Written
}

impl Stage {
    /// Share of the run completed once this stage is reached.
    pub fn fraction(self) -> f32 {
        match self {
            Stage::Started => 0.2,
            Stage::Filtered => 0.5,
            Stage::Computed => 0.8,
            Stage::Written => 1.0
        }
    }
}
