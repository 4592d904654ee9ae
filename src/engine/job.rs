use std::any::Any;

use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

use crate::engine::{GeneratedReport, Orchestrator, ReportRequest, Stage};
use crate::errors::ReportError;

// Four progress events plus the terminal one always fit, so the worker never waits.
const EVENT_CAPACITY: usize = 8;

/// What a running job reports back to its listener.
#[derive(Debug)]
pub enum JobEvent {
    Progress(Stage),
    Succeeded(GeneratedReport),
    Failed(ReportError)
}

/// The listener's view of a job: running until exactly one terminal event arrives.
#[derive(Debug, Default)]
pub enum JobState {
    #[default]
    Idle,
    Running(Stage),
    Succeeded(GeneratedReport),
    Failed(ReportError)
}

impl JobState {
    /// Folds an event into the state. Terminal states ignore later events.
    pub fn apply(self, event: JobEvent) -> JobState {
        match (self, event) {
            (terminal @ (JobState::Succeeded(_) | JobState::Failed(_)), _) => terminal,
            (_, JobEvent::Progress(stage)) => JobState::Running(stage),
            (_, JobEvent::Succeeded(report)) => JobState::Succeeded(report),
            (_, JobEvent::Failed(error)) => JobState::Failed(error)
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, JobState::Succeeded(_) | JobState::Failed(_))
    }
}

/// A report run on a blocking worker thread.
///
/// There is no cancellation: once spawned the run always ends in success or failure.
pub struct ReportJob {
    events: mpsc::Receiver<JobEvent>,
    handle: JoinHandle<()>
}

impl ReportJob {
    pub fn spawn(orchestrator: Orchestrator, request: ReportRequest) -> Self {
        let (sender, events) = mpsc::channel::<JobEvent>(EVENT_CAPACITY);

        let handle = spawn_blocking(move || {
            let result = orchestrator.run_with_progress(&request, |stage| {
                debug!("Report job reached {stage:?}");

                if sender.blocking_send(JobEvent::Progress(stage)).is_err() {
                    debug!("Progress listener has gone away");
                }
            });

            let event = match result {
                Ok(report) => JobEvent::Succeeded(report),
                Err(error) => {
                    error!("Report job failed: {error}");
                    JobEvent::Failed(error)
                }
            };

            if sender.blocking_send(event).is_err() {
                warn!("Report job finished but nobody is listening");
            }
        });

        Self::from_parts(events, handle)
    }

    pub(super) fn from_parts(events: mpsc::Receiver<JobEvent>, handle: JoinHandle<()>) -> Self {
        Self { events, handle }
    }

    /// Receives the next event, or `None` once the job has finished and all events were read.
    pub async fn next_event(&mut self) -> Option<JobEvent> {
        self.events.recv().await
    }

    /// Drains the job to its terminal event.
    ///
    /// A worker that dies before sending one (a panic, or a runtime shutting
    /// down under it) is reported as `ReportError::Interrupted`.
    pub async fn wait(mut self) -> Result<GeneratedReport, ReportError> {
        while let Some(event) = self.events.recv().await {
            match event {
                JobEvent::Progress(stage) => debug!("Report progress {:.0}%", stage.fraction() * 100.0),
                JobEvent::Succeeded(report) => return Ok(report),
                JobEvent::Failed(error) => return Err(error)
            }
        }

        let reason = match self.handle.await {
            Err(join_error) if join_error.is_panic() => panic_reason(join_error.into_panic()),
            Err(join_error) => join_error.to_string(),
            Ok(()) => "worker ended without reporting a result".to_string()
        };

        error!("Report job was interrupted: {reason}");
        Err(ReportError::interrupted(reason))
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => format!("worker panicked: {message}"),
        Err(payload) => match payload.downcast_ref::<&str>() {
            Some(message) => format!("worker panicked: {message}"),
            None => "worker panicked".to_string()
        }
    }
}
