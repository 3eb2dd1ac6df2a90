//! Visitors
//!
//! The visitor ledger: one append-only entry per face presentation.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::VisitorsServiceError;
pub use service::*;
