//! JavaScript installed into every fresh isolate before user code runs

use serde_json::Value;

use crate::constants::HARNESS_GLOBAL;

/// Script name shown in stack traces for the prelude
pub const PRELUDE_SCRIPT: &str = "[judge:prelude]";
/// Script name shown in stack traces for the submission
pub const SUBMISSION_SCRIPT: &str = "[judge:submission]";
/// Script name for entry point lookups
pub const RESOLVE_SCRIPT: &str = "[judge:resolve]";
/// Script name for test-case calls
pub const INVOKE_SCRIPT: &str = "[judge:invoke]";

/// Installs `console`, the frozen `__judge` harness and strips everything
/// else the host runtime put on the global object.
///
/// Every builtin the harness relies on is captured up front so a submission
/// that patches `JSON`, `Reflect` or prototypes cannot corrupt reporting.
pub const PRELUDE: &str = r#"
((ops) => {
    const log = ops.op_judge_log;
    const report = ops.op_judge_report;

    const stringify = JSON.stringify;
    const apply = Reflect.apply;
    const assign = Object.assign;
    const create = Object.create;
    const defineProperty = Object.defineProperty;
    const freeze = Object.freeze;
    const hasInstance = Function.prototype[Symbol.hasInstance];
    const isFinite = Number.isFinite;
    const toText = String;
    const PromiseCtor = Promise;
    const ReferenceErrorCtor = ReferenceError;

    // Null-prototype copy so an inherited `toJSON` cannot rewrite the message
    const post = (message) => report(stringify(assign(create(null), message)));

    const render = (value) => {
        if (typeof value === "string") {
            return value;
        }
        if (typeof value === "function") {
            return `[Function: ${value.name || "anonymous"}]`;
        }
        if (typeof value === "object" && value !== null) {
            try {
                const text = stringify(value);
                if (text !== undefined) {
                    return text;
                }
            } catch (_) {}
        }
        try {
            return toText(value);
        } catch (_) {
            return "[unprintable]";
        }
    };

    const describe = (error) => {
        if (typeof error === "object" && error !== null) {
            try {
                const name = error.name;
                const message = error.message;
                if (typeof message === "string") {
                    return typeof name === "string" && name !== "" ? `${name}: ${message}` : message;
                }
            } catch (_) {}
        }
        return render(error);
    };

    const encode = (value) => {
        switch (typeof value) {
            case "undefined":
                return { status: "opaque", repr: "undefined" };
            case "number":
                return isFinite(value)
                    ? { status: "returned", json: stringify(value) }
                    : { status: "opaque", repr: toText(value) };
            case "bigint":
                return { status: "opaque", repr: `${toText(value)}n` };
            case "symbol":
            case "function":
                return { status: "opaque", repr: render(value) };
            case "string":
            case "boolean":
                return { status: "returned", json: stringify(value) };
        }
        if (value === null) {
            return { status: "returned", json: "null" };
        }
        if (value instanceof PromiseCtor) {
            return { status: "opaque", repr: "[object Promise]" };
        }
        try {
            const json = stringify(value);
            if (json !== undefined) {
                return { status: "returned", json };
            }
        } catch (_) {}
        return { status: "opaque", repr: render(value) };
    };

    const consoleMethod = (level) => (...args) => {
        let line = "";
        for (let i = 0; i < args.length; i++) {
            if (i > 0) {
                line += " ";
            }
            line += render(args[i]);
        }
        log(level, line);
    };

    const sandboxConsole = freeze({
        log: consoleMethod("log"),
        info: consoleMethod("info"),
        debug: consoleMethod("debug"),
        warn: consoleMethod("warn"),
        error: consoleMethod("error"),
    });
    try {
        defineProperty(globalThis, "console", {
            value: sandboxConsole, writable: true, configurable: true, enumerable: false,
        });
    } catch (_) {
        globalThis.console = sandboxConsole;
    }

    let entry = null;

    const harness = freeze({
        resolve(lookup) {
            let candidate;
            try {
                candidate = lookup();
            } catch (error) {
                post(apply(hasInstance, ReferenceErrorCtor, [error])
                    ? { status: "missing" }
                    : { status: "threw", message: describe(error) });
                return;
            }
            if (typeof candidate !== "function") {
                post({ status: "not_callable", type: candidate === null ? "null" : typeof candidate });
                return;
            }
            entry = candidate;
            post({ status: "resolved" });
        },
        invoke(args) {
            if (entry === null) {
                post({ status: "threw", message: "entry point has not been resolved" });
                return;
            }
            let value;
            try {
                value = apply(entry, undefined, args);
            } catch (error) {
                post({ status: "threw", message: describe(error) });
                return;
            }
            post(encode(value));
        },
    });
    defineProperty(globalThis, "__judge", {
        value: harness, writable: false, configurable: false, enumerable: false,
    });

    delete globalThis.Deno;
    delete globalThis.__bootstrap;
    delete globalThis.eval;

    const AsyncFunction = (async function () {}).constructor;
    const GeneratorFunction = (function* () {}).constructor;
    const AsyncGeneratorFunction = (async function* () {}).constructor;
    for (const ctor of [Function, AsyncFunction, GeneratorFunction, AsyncGeneratorFunction]) {
        defineProperty(ctor.prototype, "constructor", {
            value: undefined, configurable: false, writable: false,
        });
    }
})(Deno.core.ops);
"#;

/// Script that looks `name` up in the global scope, covering both
/// `function`/`var` declarations and top-level `let`/`const`/`class`
pub fn resolve_script(name: &str) -> String {
    format!("{}.resolve(() => {});", HARNESS_GLOBAL, name)
}

/// Script that calls the resolved entry point with `args` spread positionally
pub fn invoke_script(args: &[Value]) -> String {
    let literal = Value::Array(args.to_vec()).to_string();
    format!("{}.invoke({});", HARNESS_GLOBAL, literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_script_references_binding() {
        assert_eq!(resolve_script("twoSum"), "__judge.resolve(() => twoSum);");
    }

    #[test]
    fn test_invoke_script_embeds_arguments_as_literal() {
        let script = invoke_script(&[json!(7), json!("a\"b"), json!([1, 2])]);
        assert_eq!(script, r#"__judge.invoke([7,"a\"b",[1,2]]);"#);
    }

    #[test]
    fn test_prelude_installs_reserved_global() {
        assert!(PRELUDE.contains(&format!("\"{}\"", HARNESS_GLOBAL)));
        assert!(PRELUDE.contains("delete globalThis.Deno"));
        assert!(PRELUDE.contains("delete globalThis.__bootstrap"));
    }
}
