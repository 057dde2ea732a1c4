//! Entry-point resolution

use uuid::Uuid;

use crate::models::Failure;
use crate::sandbox::prelude::{resolve_script, RESOLVE_SCRIPT};
use crate::sandbox::{ExecutionContext, HarnessMessage, ScriptOutcome};

/// Handle to the callable resolved inside one execution context.
///
/// The callable itself stays inside the isolate; the handle only records
/// which context it belongs to. It cannot outlive that context in any useful
/// way because [`ExecutionContext::finish`] consumes the context.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    context_id: Uuid,
    name: String,
}

impl EntryPoint {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this handle was produced by `ctx`
    pub fn belongs_to(&self, ctx: &ExecutionContext) -> bool {
        self.context_id == ctx.id()
    }
}

/// Look up `name` among the bindings the submission created and check that
/// it can be called
pub fn resolve(ctx: &mut ExecutionContext, name: &str) -> Result<EntryPoint, Failure> {
    match ctx.run_harness_script(RESOLVE_SCRIPT, resolve_script(name))? {
        ScriptOutcome::Reported(HarnessMessage::Resolved) => Ok(EntryPoint {
            context_id: ctx.id(),
            name: name.to_string(),
        }),
        ScriptOutcome::Reported(HarnessMessage::Missing) => Err(Failure::entry_point_missing(name)),
        ScriptOutcome::Reported(HarnessMessage::NotCallable { type_of }) => {
            Err(Failure::entry_point_not_callable(name, &type_of))
        }
        ScriptOutcome::Reported(HarnessMessage::Threw { message }) => Err(Failure::load_error(
            format!("Reading entry point `{}` threw: {}", name, message),
        )),
        ScriptOutcome::Reported(other) => Err(Failure::load_error(format!(
            "Unexpected harness message while resolving `{}`: {:?}",
            name, other
        ))),
        ScriptOutcome::Silent => Err(Failure::load_error(format!(
            "Resolving entry point `{}` produced no result",
            name
        ))),
        ScriptOutcome::Errored(message) => Err(Failure::load_error(message)),
    }
}
