//! Request middleware shared by every route.

mod body_limit;
mod cors;

pub(crate) use body_limit::BodyLimit;
pub(crate) use cors::{CorsConfigError, cors_handler};
