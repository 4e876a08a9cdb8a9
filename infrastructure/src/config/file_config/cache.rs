//! Answer cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Reuse answers to identical requests
    pub enabled: bool,
    /// Seconds an answer stays valid
    pub ttl_seconds: u64,
    /// Maximum number of cached answers
    pub capacity: usize,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 900,
            capacity: 256,
        }
    }
}

impl FileCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}
