//! Ad-hoc judging and playground handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Judge routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/judge", post(handler::judge_submission))
        .route("/run", post(handler::run_snippet))
}
