//! JsJudge - sandboxed JavaScript judge
//!
//! Runs untrusted JavaScript submissions in disposable V8 isolates, calls an
//! agreed entry point once per test case and grades what it returns.
//!
//! # Features
//!
//! - One fresh isolate per submission with no filesystem, network or module access
//! - Shared wall-clock budget and heap limit per submission
//! - Console output captured in order, even when a run is cut short
//! - Problem catalog with hidden test cases
//! - Playground runs of a bare function body
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Request-level logic on top of the engine
//! - **Judge**: Resolver, harness, comparison and report assembly
//! - **Sandbox**: Isolate lifecycle, watchdog and host ops
//! - **Models**: Domain models and DTOs

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod sandbox;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use judge::{Judge, JudgeError};
pub use state::AppState;
