//! Process Environment
//!
//! Reads variables from the running process.

use std::ffi::OsString;

use crate::domain::gateways::EnvSource;

/// EnvSource backed by `std::env`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|raw| decode(key, raw))
    }
}

/// A set variable stays set even when its value is not UTF-8; invalid
/// sequences are replaced so the value can still reach the driver.
fn decode(key: &str, raw: OsString) -> String {
    match raw.into_string() {
        Ok(value) => value,
        Err(raw) => {
            tracing::warn!(variable = key, "Environment variable is not valid UTF-8");
            raw.to_string_lossy().into_owned()
        }
    }
}
