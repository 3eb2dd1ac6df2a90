//! Visitors
//!
//! Face search at the gate (`POST /search-face`) and the visitor ledger
//! (`GET /visitors`).

mod errors;
mod handlers;

pub(crate) use handlers::*;
