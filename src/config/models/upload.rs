//! Upload configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how large uploaded photos may be
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory for stored photos, created on demand
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,
    /// Size cap in mebibytes
    #[serde(default = "default_max_file_mb")]
    pub max_file_mb: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_file_mb: default_max_file_mb(),
        }
    }
}

impl UploadConfig {
    /// Size cap in bytes
    pub fn max_file_bytes(&self) -> usize {
        usize::try_from(self.max_file_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_mb == 0 {
            return Err("Upload size cap cannot be 0".to_string());
        }
        if self.dir.as_os_str().is_empty() {
            return Err("Upload directory cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_file_mb() -> u64 {
    4
}
