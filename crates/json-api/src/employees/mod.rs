//! Employees
//!
//! Enrollment (`POST /submit`) and the enrolled identity listing
//! (`GET /employees`).

mod errors;
mod handlers;

pub(crate) use handlers::*;
