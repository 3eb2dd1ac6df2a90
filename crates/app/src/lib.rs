//! Shared application domain, persistence and adapter modules.

pub mod blobs;
pub mod context;
pub mod database;
pub mod domain;
pub mod keys;
pub mod matching;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
