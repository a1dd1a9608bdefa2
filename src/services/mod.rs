//! External service interactions
//!
//! This module contains the pieces that talk to the course API:
//! - the blocking HTTP client
//! - the background worker threads and their completion events

pub mod api;
pub mod worker;

pub use api::{ApiError, CourseApi};
pub use worker::{ApiEvent, ApiWorker};
