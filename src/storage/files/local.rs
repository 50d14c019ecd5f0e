//! Local file system photo store

use crate::config::UploadConfig;
use crate::utils::error::{GatewayError, Result};
use rand::RngCore;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::types::{ImageFormat, StoredPhoto, detect_mime};

/// Message for a missing or empty upload
pub const NO_IMAGE_MESSAGE: &str = "No image uploaded.";

/// Random bytes in a generated file name
const NAME_BYTES: usize = 10;

/// Validates and stores uploaded photos
#[derive(Debug, Clone)]
pub struct PhotoStore {
    base_path: PathBuf,
    max_file_mb: u64,
    max_bytes: usize,
}

impl PhotoStore {
    /// Create a store; the directory is created on first save
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            base_path: config.dir.clone(),
            max_file_mb: config.max_file_mb,
            max_bytes: config.max_file_bytes(),
        }
    }

    /// Directory photos are written to
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Size cap in bytes
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Fail once `len` bytes exceed the cap
    pub fn check_size(&self, len: usize) -> Result<()> {
        if len > self.max_bytes {
            return Err(GatewayError::payload_too_large(format!(
                "File too large (max {}MB).",
                self.max_file_mb
            )));
        }
        Ok(())
    }

    /// Check presence, size, then content type.
    ///
    /// The type comes from the bytes alone; a client-declared content type
    /// is never trusted.
    pub fn validate(&self, data: &[u8]) -> Result<ImageFormat> {
        if data.is_empty() {
            return Err(GatewayError::validation(NO_IMAGE_MESSAGE));
        }
        self.check_size(data.len())?;

        ImageFormat::sniff(data).ok_or_else(|| {
            GatewayError::validation(format!("Unsupported file type: {}", detect_mime(data)))
        })
    }

    /// Write `data` under a fresh random name
    pub async fn save(&self, data: &[u8], format: ImageFormat) -> Result<StoredPhoto> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            GatewayError::FileStorage(format!("Failed to create upload directory: {}", e))
        })?;

        let file_name = format!("{}.{}", Self::random_name(), format.extension());
        let path = self.base_path.join(&file_name);

        let file = fs::File::create(&path)
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Failed to create file: {}", e)))?;
        Self::write_or_remove(&path, file, data).await?;

        debug!("Photo stored: {} ({} bytes)", path.display(), data.len());
        Ok(StoredPhoto {
            file_name,
            path,
            format,
            size: data.len(),
        })
    }

    /// Write `data` through `writer`; on failure the partial file at `path`
    /// is deleted.
    pub(crate) async fn write_or_remove<W>(path: &Path, mut writer: W, data: &[u8]) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let written: std::io::Result<()> = async {
            writer.write_all(data).await?;
            writer.flush().await
        }
        .await;
        drop(writer);

        if let Err(e) = written {
            if let Err(remove_err) = fs::remove_file(path).await {
                warn!(
                    "Failed to remove partial upload {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(GatewayError::FileStorage(format!(
                "Failed to write file: {}",
                e
            )));
        }
        Ok(())
    }

    pub(crate) fn random_name() -> String {
        let mut bytes = [0u8; NAME_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
