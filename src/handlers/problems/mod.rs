//! Problem catalog handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}/submissions", post(handler::submit_solution))
}
