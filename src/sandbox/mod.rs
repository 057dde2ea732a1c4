//! Sandboxed JavaScript execution
//!
//! Each submission gets its own V8 isolate built through `deno_core`. The
//! isolate has no filesystem, network, process or module-loading capability;
//! the only host bindings are the console sink and the harness reporter.
//! A watchdog thread terminates the isolate when the time budget runs out
//! and a near-heap-limit callback does the same for memory.

pub mod collector;
pub mod context;
pub mod ops;
pub mod prelude;
pub mod watchdog;

use std::time::Duration;

use crate::config::JudgeConfig;

pub use collector::OutputCollector;
pub use context::{ExecutionContext, ScriptOutcome};
pub use ops::HarnessMessage;

/// Resource limits applied to one execution context
#[derive(Debug, Clone)]
pub struct SandboxLimits {
    /// Wall-clock budget shared by the load phase and all harness calls
    pub time_budget: Duration,
    /// V8 heap limit in bytes
    pub max_heap_bytes: usize,
    /// Cap on captured console output
    pub max_log_bytes: usize,
}

impl From<&JudgeConfig> for SandboxLimits {
    fn from(config: &JudgeConfig) -> Self {
        Self {
            time_budget: config.time_budget,
            max_heap_bytes: config.max_heap_bytes,
            max_log_bytes: config.max_log_bytes,
        }
    }
}

/// Failures of the sandbox machinery itself, as opposed to the submission
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("Failed to install sandbox prelude: {0}")]
    Prelude(String),

    #[error("Failed to start watchdog thread: {0}")]
    Watchdog(#[source] std::io::Error),
}
