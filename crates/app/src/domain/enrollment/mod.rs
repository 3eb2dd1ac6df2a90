//! Enrollment
//!
//! Validates and commits a new identity, making sure each person and each
//! physical face is enrolled at most once.

pub mod data;
pub mod errors;
pub mod service;

pub use errors::EnrollmentError;
pub use service::*;
