//! Shared test infrastructure.

mod scenarios;

pub(crate) use context::TestContext;
