//! Shared Module
//!
//! Cross-cutting types used across the crate.

pub mod errors;

pub use errors::BootstrapError;
