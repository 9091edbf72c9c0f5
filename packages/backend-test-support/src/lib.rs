//! Backend test support utilities
//!
//! Shared by the backend's integration tests: one-time logging setup and
//! assertions for problem-details error responses.

pub mod logging;
pub mod problem_details;
