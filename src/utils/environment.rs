use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "TRANSCRIPT_IMPORTER_CONFIG";
/// Environment variable naming the planner state file
pub const STATE_ENV: &str = "TRANSCRIPT_IMPORTER_STATE";

const APP_DIR: &str = "transcript-importer";
const STATE_FILE: &str = "planner.json";

fn path_from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from)
}

pub fn config_path_from_env() -> Option<PathBuf> {
    path_from_env(CONFIG_ENV)
}

/// Platform data directory location of the planner state (`<data_dir>/transcript-importer/planner.json`)
pub fn default_state_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine the user data directory")?;
    Ok(data_dir.join(APP_DIR).join(STATE_FILE))
}

/// State path from an explicit flag, then the environment, then the data directory
pub fn resolve_state_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match path_from_env(STATE_ENV) {
        Some(path) => Ok(path),
        None => default_state_path(),
    }
}
