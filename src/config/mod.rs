//! Import configuration: locale vocabulary and ingestion throttling.
//!
//! Configuration is optional. When present it is a JSON document whose keys override the
//! built-in defaults:
//!
//! ```json
//! {
//!   "vocabulary": { "general_elective": "일반선택" },
//!   "ingest": { "batch_size": 10 }
//! }
//! ```
//!
//! The file is located via `--config`, then the `TRANSCRIPT_IMPORTER_CONFIG` environment
//! variable; with neither set the defaults are used.

pub mod vocabulary;

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use vocabulary::Vocabulary;

/// Records per ingestion batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Throttling for the sequential ingestion engine
///
/// The delays exist for stores whose state settles asynchronously after a write. The bundled
/// in-memory store is synchronous, so both default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub batch_size: usize,
    pub record_delay_ms: u64,
    pub batch_delay_ms: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self { batch_size: DEFAULT_BATCH_SIZE, record_delay_ms: 0, batch_delay_ms: 0 }
    }
}

impl IngestConfig {
    /// Batch size clamped to at least one record
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    pub fn record_delay(&self) -> Duration {
        Duration::from_millis(self.record_delay_ms)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub vocabulary: Vocabulary,
    pub ingest: IngestConfig,
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> Result<ImportConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve configuration from an explicit path, the environment, or defaults
pub fn resolve_config(explicit: Option<&Path>) -> Result<ImportConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match crate::utils::environment::config_path_from_env() {
            Some(path) => load_config(&path),
            None => Ok(ImportConfig::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_ingest_config() {
        let config = IngestConfig::default();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.record_delay(), Duration::ZERO);
        assert_eq!(config.batch_delay(), Duration::ZERO);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let config = IngestConfig { batch_size: 0, ..IngestConfig::default() };
        assert_eq!(config.effective_batch_size(), 1);
    }

    #[test]
    fn test_load_config_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"ingest":{{"batch_size":2,"batch_delay_ms":10}}}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.ingest.batch_size, 2);
        assert_eq!(config.ingest.batch_delay(), Duration::from_millis(10));
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_load_config_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }
}
