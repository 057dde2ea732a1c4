//! Isolated execution context
//!
//! One fresh V8 isolate per submission, with no capability beyond the
//! injected console. Field order matters: the watchdog is dropped (and its
//! thread joined) before the runtime, and the heap guard after it.

use deno_core::{v8, JsRuntime, RuntimeOptions};
use uuid::Uuid;

use crate::models::{CapturedLogs, Failure};

use super::collector::OutputCollector;
use super::ops::{judge_ext, HarnessMessage, HarnessReport};
use super::prelude::{PRELUDE, PRELUDE_SCRIPT, SUBMISSION_SCRIPT};
use super::watchdog::{HeapGuard, Watchdog};
use super::{SandboxError, SandboxLimits};

/// Result of running one harness script
pub enum ScriptOutcome {
    /// The script ran and the harness posted this message
    Reported(HarnessMessage),
    /// The script ran but nothing usable was posted
    Silent,
    /// The script itself raised an error the harness did not catch
    Errored(String),
}

/// A disposable, capability-free JavaScript runtime
pub struct ExecutionContext {
    id: Uuid,
    limits: SandboxLimits,
    watchdog: Watchdog,
    runtime: JsRuntime,
    heap_guard: HeapGuard,
}

impl ExecutionContext {
    /// Build a fresh isolate, install the prelude and start the clock
    pub fn create(limits: &SandboxLimits) -> Result<Self, SandboxError> {
        let create_params = v8::CreateParams::default().heap_limits(0, limits.max_heap_bytes);

        let mut runtime = JsRuntime::new(RuntimeOptions {
            extensions: vec![judge_ext::init()],
            create_params: Some(create_params),
            ..Default::default()
        });

        runtime
            .op_state()
            .borrow_mut()
            .put(OutputCollector::new(limits.max_log_bytes));

        runtime
            .execute_script(PRELUDE_SCRIPT, PRELUDE)
            .map_err(|e| SandboxError::Prelude(e.to_string()))?;

        let heap_guard = HeapGuard::install(&mut runtime);
        let watchdog = Watchdog::arm(runtime.v8_isolate().thread_safe_handle(), limits.time_budget)
            .map_err(SandboxError::Watchdog)?;

        Ok(Self {
            id: Uuid::new_v4(),
            limits: limits.clone(),
            watchdog,
            runtime,
            heap_guard,
        })
    }

    /// Identifier used to tie entry point handles to this context
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Run the submission's top-level code
    pub fn load(&mut self, source: &str) -> Result<(), Failure> {
        let result = self
            .runtime
            .execute_script(SUBMISSION_SCRIPT, source.to_string());

        self.check_budget()?;
        result
            .map(|_| ())
            .map_err(|e| Failure::load_error(e.to_string()))
    }

    /// Run a harness script and collect the message it posted.
    ///
    /// Returns `Err` only for total failures: the time budget or heap limit
    /// was hit while the script was running.
    pub fn run_harness_script(
        &mut self,
        name: &'static str,
        script: String,
    ) -> Result<ScriptOutcome, Failure> {
        let result = self.runtime.execute_script(name, script);
        self.check_budget()?;

        if let Err(e) = result {
            return Ok(ScriptOutcome::Errored(e.to_string()));
        }

        let report = self
            .runtime
            .op_state()
            .borrow_mut()
            .try_take::<HarnessReport>();

        Ok(match report {
            Some(HarnessReport(payload)) => match serde_json::from_str(&payload) {
                Ok(message) => ScriptOutcome::Reported(message),
                Err(e) => {
                    tracing::warn!(error = %e, "Unreadable harness message");
                    ScriptOutcome::Silent
                }
            },
            None => ScriptOutcome::Silent,
        })
    }

    /// Fail if the isolate was terminated for exceeding a limit
    pub fn check_budget(&self) -> Result<(), Failure> {
        if self.heap_guard.triggered() {
            return Err(Failure::memory_limit_exceeded(self.limits.max_heap_bytes));
        }
        if self.watchdog.fired() {
            return Err(Failure::timeout(self.limits.time_budget));
        }
        Ok(())
    }

    /// Stop the clock, tear the isolate down and hand over captured output
    pub fn finish(mut self) -> CapturedLogs {
        self.watchdog.disarm();
        self.runtime
            .op_state()
            .borrow_mut()
            .try_take::<OutputCollector>()
            .map(OutputCollector::into_logs)
            .unwrap_or_default()
    }
}
