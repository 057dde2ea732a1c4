//! Test harness: drives the resolved entry point once per test case

use serde_json::Value;

use crate::models::{ExecutionOutcome, Failure, Returned, TestCase, TestResult};
use crate::sandbox::prelude::{invoke_script, INVOKE_SCRIPT};
use crate::sandbox::{ExecutionContext, HarnessMessage, ScriptOutcome};

use super::compare;
use super::resolver::EntryPoint;

/// Call the entry point once with `args` spread as positional arguments.
///
/// A throw inside the call is a local failure and comes back as
/// `Ok(ExecutionOutcome::Failure)`. `Err` means the shared budget or heap
/// limit was exhausted and the whole run is over.
pub fn invoke(
    ctx: &mut ExecutionContext,
    entry: &EntryPoint,
    args: &[Value],
) -> Result<ExecutionOutcome, Failure> {
    if !entry.belongs_to(ctx) {
        return Ok(ExecutionOutcome::Failure(Failure::runtime_error(format!(
            "Entry point `{}` belongs to another execution context",
            entry.name()
        ))));
    }

    let outcome = match ctx.run_harness_script(INVOKE_SCRIPT, invoke_script(args))? {
        ScriptOutcome::Reported(HarnessMessage::Returned { json }) => {
            let returned = match serde_json::from_str(&json) {
                Ok(value) => Returned::Json(value),
                Err(_) => Returned::Opaque(json),
            };
            ExecutionOutcome::Success { returned }
        }
        ScriptOutcome::Reported(HarnessMessage::Opaque { repr }) => ExecutionOutcome::Success {
            returned: Returned::Opaque(repr),
        },
        ScriptOutcome::Reported(HarnessMessage::Threw { message }) => {
            ExecutionOutcome::Failure(Failure::runtime_error(message))
        }
        ScriptOutcome::Reported(other) => ExecutionOutcome::Failure(Failure::runtime_error(
            format!("Unexpected harness message: {:?}", other),
        )),
        ScriptOutcome::Silent => {
            ExecutionOutcome::Failure(Failure::runtime_error("Call produced no result"))
        }
        ScriptOutcome::Errored(message) => ExecutionOutcome::Failure(Failure::runtime_error(message)),
    };

    Ok(outcome)
}

/// Run every test case in order against the same context.
///
/// State the submission mutates in one call is visible to the next. A throw
/// fails only its own case; a timeout aborts the run.
pub fn run_cases(
    ctx: &mut ExecutionContext,
    entry: &EntryPoint,
    cases: &[TestCase],
) -> Result<Vec<TestResult>, Failure> {
    let mut results = Vec::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        let outcome = invoke(ctx, entry, &case.input)?;
        let result = compare::grade(case, outcome);

        tracing::debug!(
            case = index + 1,
            passed = result.passed,
            error = result.error.as_deref().unwrap_or(""),
            "Test case graded"
        );
        results.push(result);
    }

    Ok(results)
}
