//! Step-by-step generator execution and its report.
//!
//! Steps run strictly in order. The first fatal error stops the run; steps
//! already completed keep their recorded status.

use tracing::{debug, warn};

use crate::error::{ScaffolderError, ScaffolderResult};

/// What happened in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Done(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub label: String,
    pub status: StepStatus,
}

impl StepReport {
    pub fn message(&self) -> &str {
        match &self.status {
            StepStatus::Done(m) | StepStatus::Failed(m) => m,
        }
    }
}

/// Result of running one generator.
#[derive(Debug, Clone)]
pub struct GeneratorReport {
    pub generator: &'static str,
    pub steps: Vec<StepReport>,
    pub failure: Option<ScaffolderError>,
}

impl GeneratorReport {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Status messages of completed steps, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Done(_)))
            .map(StepReport::message)
            .collect()
    }

    /// Turn a failed run into its error.
    pub fn into_result(self) -> ScaffolderResult<Self> {
        match self.failure.clone() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Runs steps and collects a [`GeneratorReport`].
pub(crate) struct StepRunner {
    report: GeneratorReport,
}

impl StepRunner {
    pub(crate) fn new(generator: &'static str) -> Self {
        Self {
            report: GeneratorReport {
                generator,
                steps: Vec::new(),
                failure: None,
            },
        }
    }

    pub(crate) fn aborted(&self) -> bool {
        self.report.failure.is_some()
    }

    /// Run a step whose result is a status message.
    pub(crate) fn step(&mut self, label: &str, action: impl FnOnce() -> ScaffolderResult<String>) {
        let _ = self.value(label, || action().map(|msg| (msg, ())));
    }

    /// Run a step that also yields a value for later steps.
    pub(crate) fn value<T>(
        &mut self,
        label: &str,
        action: impl FnOnce() -> ScaffolderResult<(String, T)>,
    ) -> Option<T> {
        if self.aborted() {
            return None;
        }

        match action() {
            Ok((message, value)) => {
                debug!(generator = self.report.generator, step = label, %message, "Step done");
                self.report.steps.push(StepReport {
                    label: label.to_string(),
                    status: StepStatus::Done(message),
                });
                Some(value)
            }
            Err(err) => {
                warn!(generator = self.report.generator, step = label, error = %err, "Step failed");
                self.report.steps.push(StepReport {
                    label: label.to_string(),
                    status: StepStatus::Failed(err.to_string()),
                });
                self.report.failure = Some(err);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> GeneratorReport {
        self.report
    }
}
