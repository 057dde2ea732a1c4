//! Business logic services

pub mod judge_service;
pub mod problem_service;

pub use judge_service::JudgeService;
pub use problem_service::ProblemService;
