//! Execution-context lifecycle and thread isolation

use std::time::Duration;

use tokio::sync::{oneshot, OwnedSemaphorePermit};

use crate::constants::TEARDOWN_GRACE_MS;
use crate::models::{CapturedLogs, Failure};
use crate::sandbox::{ExecutionContext, SandboxError, SandboxLimits};

use super::resolver::{self, EntryPoint};
use super::JudgeError;

/// Create a context, load `source`, resolve `entry_name` and hand both to
/// `drive`, then tear the context down.
///
/// The context never outlives this call and the captured logs are returned
/// whatever the outcome was.
pub fn run_in_context<T, F>(
    limits: &SandboxLimits,
    source: &str,
    entry_name: &str,
    drive: F,
) -> Result<(Result<T, Failure>, CapturedLogs), SandboxError>
where
    F: FnOnce(&mut ExecutionContext, &EntryPoint) -> Result<T, Failure>,
{
    let mut ctx = ExecutionContext::create(limits)?;
    let outcome = drive_context(&mut ctx, source, entry_name, drive);
    let logs = ctx.finish();
    Ok((outcome, logs))
}

fn drive_context<T, F>(
    ctx: &mut ExecutionContext,
    source: &str,
    entry_name: &str,
    drive: F,
) -> Result<T, Failure>
where
    F: FnOnce(&mut ExecutionContext, &EntryPoint) -> Result<T, Failure>,
{
    ctx.load(source)?;
    let entry = resolver::resolve(ctx, entry_name)?;
    let value = drive(ctx, &entry)?;

    // The watchdog may have fired after the last script returned
    ctx.check_budget()?;
    Ok(value)
}

/// Run `job` on a dedicated thread that owns its V8 isolate.
///
/// Isolates are `!Send`, so the job builds its context on that thread. The
/// admission permit travels with the thread and is released only when the
/// isolate is gone. Returns `Ok(None)` when the thread did not report back
/// within the budget plus a teardown grace period.
pub async fn run_isolated<T, F>(
    permit: OwnedSemaphorePermit,
    budget: Duration,
    job: F,
) -> Result<Option<T>, JudgeError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let dispatch = tracing::dispatcher::get_default(|d| d.clone());
    let span = tracing::Span::current();

    std::thread::Builder::new()
        .name("judge-sandbox".to_string())
        .spawn(move || {
            let _permit = permit;
            let _dispatch = tracing::dispatcher::set_default(&dispatch);
            let _entered = span.enter();
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    if tx.send(Err(e)).is_err() {
                        tracing::warn!("Sandbox result receiver dropped");
                    }
                    return;
                }
            };

            let result = rt.block_on(async move { job() });
            if tx.send(Ok(result)).is_err() {
                tracing::warn!("Sandbox result receiver dropped before result was sent");
            }
        })
        .map_err(JudgeError::Spawn)?;

    let deadline = budget + Duration::from_millis(TEARDOWN_GRACE_MS);
    match tokio::time::timeout(deadline, rx).await {
        Ok(Ok(Ok(value))) => Ok(Some(value)),
        Ok(Ok(Err(e))) => Err(JudgeError::Spawn(e)),
        Ok(Err(_)) => Err(JudgeError::SandboxLost),
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Sandbox thread missed its deadline");
            Ok(None)
        }
    }
}
