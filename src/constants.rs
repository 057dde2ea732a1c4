//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Maximum accepted request body in bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// JUDGE DEFAULTS
// =============================================================================

/// Entry point looked up when a request does not name one
pub const DEFAULT_ENTRY_POINT_NAME: &str = "solution";

/// Wall-clock budget shared by loading and every test-case call
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1000;

/// Upper bound accepted for a configured time budget
pub const MAX_TIME_BUDGET_MS: u64 = 30_000;

/// V8 heap limit per isolate in megabytes
pub const DEFAULT_MAX_HEAP_MB: usize = 64;

/// Total console output captured per run
pub const DEFAULT_MAX_LOG_BYTES: usize = 64 * 1024;

/// Largest submission accepted
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 64 * 1024;

/// Most test cases accepted in one submission
pub const DEFAULT_MAX_TEST_CASES: usize = 256;

/// Isolates allowed to run at the same time
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Extra time granted to the sandbox thread to hand back its result after
/// the budget has elapsed
pub const TEARDOWN_GRACE_MS: u64 = 500;

/// Reserved global installed by the prelude
pub const HARNESS_GLOBAL: &str = "__judge";

/// Function name used to wrap playground snippets
pub const PLAYGROUND_ENTRY_POINT: &str = "__playground__";

// =============================================================================
// JAVASCRIPT RESERVED WORDS
// =============================================================================

/// Words that can never be used as an entry point binding
pub const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    "undefined", "NaN", "Infinity", "arguments", "eval",
];

// =============================================================================
// ERROR CODES
// =============================================================================

/// Machine-readable codes for total and local failures
pub mod error_kinds {
    pub const LOAD_ERROR: &str = "LOAD_ERROR";
    pub const ENTRY_POINT_MISSING: &str = "ENTRY_POINT_MISSING";
    pub const ENTRY_POINT_NOT_CALLABLE: &str = "ENTRY_POINT_NOT_CALLABLE";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const MEMORY_LIMIT_EXCEEDED: &str = "MEMORY_LIMIT_EXCEEDED";
    pub const RUNTIME_ERROR: &str = "RUNTIME_ERROR";
}

// =============================================================================
// CATALOG
// =============================================================================

/// Built-in problem identifiers
pub mod problems {
    pub const TWO_SUM: &str = "two-sum";
}
