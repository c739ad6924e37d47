use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

fn default_db_root_dir() -> PathBuf {
    PathBuf::from("./db")
}

fn default_cache_capacity_bytes() -> u64 {
    10 * 1024 * 1024 // 10MB
}

fn default_flush_every_ms() -> Option<u64> {
    Some(3)
}

/// Creator database settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_db_root_dir")]
    pub db_root_dir: PathBuf,

    #[serde(default = "default_cache_capacity_bytes")]
    pub cache_capacity_bytes: u64,

    /// `None` leaves flushing to the backend's own schedule.
    #[serde(default = "default_flush_every_ms")]
    pub flush_every_ms: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_root_dir: default_db_root_dir(),
            cache_capacity_bytes: default_cache_capacity_bytes(),
            flush_every_ms: default_flush_every_ms(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.db_root_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("storage.db_root_dir cannot be empty".into()));
        }
        if self.cache_capacity_bytes == 0 {
            return Err(Error::InvalidConfig(
                "storage.cache_capacity_bytes must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
