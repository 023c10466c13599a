//! Shared helpers for subcommands.

use anyhow::Result;
use std::path::Path;

use sitenav::config::{ConfigError, NavHandle, print_warnings};

/// Load the declaration, printing warnings whether or not it validates.
pub fn load_handle(path: &Path) -> Result<NavHandle> {
    match NavHandle::load(path) {
        Ok(handle) => {
            print_warnings(handle.current().warnings());
            Ok(handle)
        }
        Err(ConfigError::Diagnostics(report)) => {
            report.print_warnings();
            Err(ConfigError::Diagnostics(report).into())
        }
        Err(err) => Err(err.into()),
    }
}
