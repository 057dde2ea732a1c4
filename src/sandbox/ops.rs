//! Host ops exposed to the isolate
//!
//! These are the only two bindings the prelude captures before `Deno` is
//! deleted from the global object: one feeds the output collector, the other
//! hands harness messages back to Rust.

use deno_core::{op2, OpState};
use serde::Deserialize;

use crate::models::LogLevel;

use super::collector::OutputCollector;

/// Last message posted by the in-isolate harness
pub struct HarnessReport(pub String);

/// Message posted by `__judge.resolve` or `__judge.invoke`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HarnessMessage {
    /// The entry point was found and is callable
    Resolved,
    /// Looking the binding up raised a `ReferenceError`
    Missing,
    /// The binding exists but `typeof` is not `function`
    NotCallable {
        #[serde(rename = "type")]
        type_of: String,
    },
    /// The call returned a JSON-representable value, serialized as `json`
    Returned { json: String },
    /// The call returned a value with no JSON form
    Opaque { repr: String },
    /// The lookup or the call threw
    Threw { message: String },
}

#[op2(fast)]
fn op_judge_log(state: &mut OpState, #[string] level: &str, #[string] text: &str) {
    if let Some(collector) = state.try_borrow_mut::<OutputCollector>() {
        collector.push(LogLevel::from_method(level), text);
    }
}

#[op2(fast)]
fn op_judge_report(state: &mut OpState, #[string] payload: &str) {
    state.put(HarnessReport(payload.to_string()));
}

deno_core::extension!(judge_ext, ops = [op_judge_log, op_judge_report]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_messages_parse() {
        let parsed: HarnessMessage =
            serde_json::from_str(r#"{"status":"not_callable","type":"number"}"#).unwrap();
        assert_eq!(
            parsed,
            HarnessMessage::NotCallable {
                type_of: "number".to_string()
            }
        );

        let parsed: HarnessMessage =
            serde_json::from_str(r#"{"status":"returned","json":"[1,2]"}"#).unwrap();
        assert_eq!(
            parsed,
            HarnessMessage::Returned {
                json: "[1,2]".to_string()
            }
        );

        let parsed: HarnessMessage = serde_json::from_str(r#"{"status":"missing"}"#).unwrap();
        assert_eq!(parsed, HarnessMessage::Missing);
    }
}
