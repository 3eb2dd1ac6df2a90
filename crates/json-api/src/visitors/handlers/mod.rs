//! Visitor Handlers

pub(crate) mod index;
pub(crate) mod search;
