//! Application Layer
//!
//! Use cases that sequence the bootstrap steps. They depend on domain
//! gateways, never on a concrete driver.

pub mod use_cases;
