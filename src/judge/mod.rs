//! Judge engine
//!
//! Drives one submission through its whole lifecycle: admission, a fresh
//! execution context on a dedicated thread, entry-point resolution, the test
//! harness and result assembly. Every run ends in exactly one report.

pub mod assembler;
pub mod compare;
pub mod harness;
pub mod resolver;
pub mod runner;

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::JudgeConfig;
use crate::constants::PLAYGROUND_ENTRY_POINT;
use crate::models::{CapturedLogs, Failure, PlaygroundReport, RunReport, Submission};
use crate::sandbox::{SandboxError, SandboxLimits};
use crate::utils::{validate_entry_point_name, validate_source_code};

pub use resolver::EntryPoint;

/// Errors that prevent a report from being produced at all
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("All {max} sandbox slots are busy")]
    Busy { max: usize },

    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    #[error("Failed to start sandbox thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Sandbox thread exited without a result")]
    SandboxLost,
}

/// Entry point of the engine. Cheap to clone; clones share admission permits.
#[derive(Clone)]
pub struct Judge {
    config: Arc<JudgeConfig>,
    permits: Arc<Semaphore>,
}

impl Judge {
    pub fn new(config: JudgeConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_concurrent));
        Self {
            config: Arc::new(config),
            permits,
        }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Take a sandbox slot without waiting
    fn admit(&self) -> Result<OwnedSemaphorePermit, JudgeError> {
        self.permits.clone().try_acquire_owned().map_err(|_| JudgeError::Busy {
            max: self.config.max_concurrent,
        })
    }

    /// Check a submission against the admission limits
    pub fn validate(&self, submission: &Submission) -> Result<(), JudgeError> {
        validate_source_code(&submission.source, self.config.max_source_bytes)
            .map_err(JudgeError::InvalidSubmission)?;
        validate_entry_point_name(&submission.entry_point_name)
            .map_err(|e| JudgeError::InvalidSubmission(e.to_string()))?;
        if submission.test_cases.len() > self.config.max_test_cases {
            return Err(JudgeError::InvalidSubmission(format!(
                "At most {} test cases are allowed",
                self.config.max_test_cases
            )));
        }
        Ok(())
    }

    /// Evaluate `submission` against its test cases
    pub async fn judge(&self, submission: Submission) -> Result<RunReport, JudgeError> {
        self.validate(&submission)?;
        let permit = self.admit()?;

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "judge_run",
            %run_id,
            entry_point = %submission.entry_point_name,
            cases = submission.test_cases.len()
        );

        async move {
            let limits = SandboxLimits::from(self.config.as_ref());
            let budget = limits.time_budget;

            let job = move || {
                runner::run_in_context(
                    &limits,
                    &submission.source,
                    &submission.entry_point_name,
                    |ctx, entry| harness::run_cases(ctx, entry, &submission.test_cases),
                )
            };

            let report = match runner::run_isolated(permit, budget, job).await? {
                Some(result) => {
                    let (outcome, logs) = result?;
                    assembler::assemble(outcome, logs)
                }
                None => assembler::assemble(Err(Failure::timeout(budget)), CapturedLogs::default()),
            };

            match report.error() {
                Some(error) => tracing::info!(kind = %error.kind, "Run failed"),
                None => tracing::info!(
                    passed = report.passed_count(),
                    total = report.results().len(),
                    "Run completed"
                ),
            }

            Ok::<_, JudgeError>(report)
        }
        .instrument(span)
        .await
    }

    /// Run a snippet as the body of a function and report what it returned
    pub async fn run_playground(&self, code: String) -> Result<PlaygroundReport, JudgeError> {
        validate_source_code(&code, self.config.max_source_bytes)
            .map_err(JudgeError::InvalidSubmission)?;
        let permit = self.admit()?;

        let limits = SandboxLimits::from(self.config.as_ref());
        let budget = limits.time_budget;
        let source = format!("function {}() {{\n{}\n}}", PLAYGROUND_ENTRY_POINT, code);

        let job = move || {
            runner::run_in_context(&limits, &source, PLAYGROUND_ENTRY_POINT, |ctx, entry| {
                harness::invoke(ctx, entry, &[])
            })
        };

        let report = match runner::run_isolated(permit, budget, job).await? {
            Some(result) => {
                let (outcome, logs) = result?;
                assembler::assemble_playground(outcome, logs)
            }
            None => assembler::assemble_playground(Err(Failure::timeout(budget)), CapturedLogs::default()),
        };

        tracing::debug!(failed = matches!(report, PlaygroundReport::Failed { .. }), "Playground run finished");
        Ok(report)
    }
}
