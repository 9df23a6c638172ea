//! Infrastructure Layer
//!
//! Contains all external concerns: database drivers, the process
//! environment and configuration loading.

pub mod driven_adapters;
