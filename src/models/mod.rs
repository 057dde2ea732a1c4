//! Domain models
//!
//! Submissions and test cases coming in, per-case results and run reports
//! going out, and the problems held by the catalog.

pub mod problem;
pub mod report;
pub mod submission;

pub use problem::*;
pub use report::*;
pub use submission::*;
