//! Biometric Matching Service
//!
//! Face detection, embedding and similarity search run in an external
//! service. This module holds the narrow contract the domain relies on and an
//! HTTP client for it.

mod client;
mod errors;
mod matcher;
pub mod models;

pub use client::{FaceMatcherConfig, HttpFaceMatcher};
pub use errors::FaceMatcherError;
pub use matcher::*;
