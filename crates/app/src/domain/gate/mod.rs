//! Match Gate
//!
//! Resolves a presented face against the enrolled collection and records the
//! attempt in the visitor ledger.

pub mod errors;
pub mod outcome;
pub mod service;

pub use errors::MatchGateError;
pub use outcome::MatchOutcome;
pub use service::*;
