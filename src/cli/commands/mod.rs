//! Command implementations for the Loopwise CLI
//!
//! Each command is organized into its own module.

pub mod analyze;
pub mod config;
pub mod templates;
pub mod version;

use crate::config::{CONFIG_FILE_NAME, LoopwiseConfig};
use crate::{Output, Result};
use std::path::PathBuf;

/// Resolve the configuration file path: an explicit `--config` flag wins,
/// otherwise `loopwise.yml` in the current directory.
pub(crate) fn config_path(explicit: Option<&str>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            let current_dir = std::env::current_dir()?;
            Ok(current_dir.join(CONFIG_FILE_NAME))
        }
    }
}

/// Load configuration, falling back to defaults when no file exists
pub(crate) fn load_config(explicit: Option<&str>, output: &Output) -> Result<LoopwiseConfig> {
    let path = config_path(explicit)?;

    if path.exists() {
        LoopwiseConfig::load_from_file(&path)
    } else {
        output.verbose("No configuration file found, using defaults");
        Ok(LoopwiseConfig::default())
    }
}
