//! Core types and trait definitions for the course-feedback service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod feedback;
pub mod stats;
pub mod store;
pub mod validate;

pub use feedback::{Feedback, NewFeedback};
pub use validate::{Submission, ValidationError};
