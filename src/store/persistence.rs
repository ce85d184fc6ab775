//! Planner snapshot persistence: load/save with atomic writes

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::memory::InMemoryStore;
use crate::utils::validate_file_size;

/// Snapshot schema version; bumped on incompatible format changes
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub planner: InMemoryStore,
}

impl PlannerSnapshot {
    pub fn new(planner: InMemoryStore) -> Self {
        Self { version: SNAPSHOT_VERSION, saved_at: Utc::now(), planner }
    }
}

/// Load a planner snapshot
/// Returns None if the file is missing or was written by an incompatible version
pub fn load_snapshot(path: &Path) -> Result<Option<PlannerSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut file = File::open(path)
        .with_context(|| format!("Failed to open planner state: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read planner state: {}", path.display()))?;

    let snapshot: PlannerSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse planner state: {}", path.display()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        tracing::warn!(
            expected = SNAPSHOT_VERSION,
            found = snapshot.version,
            "Planner state version mismatch, starting from an empty planner"
        );
        return Ok(None);
    }

    Ok(Some(snapshot))
}

/// Save a planner snapshot atomically (temp file + rename)
pub fn save_snapshot(path: &Path, planner: &InMemoryStore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
    }

    let snapshot = PlannerSnapshot::new(planner.clone());
    let json =
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize planner state")?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, json).context("Failed to write planner state temp file")?;
    fs::rename(temp_path, path).context("Failed to rename planner state temp file")?;

    Ok(())
}
