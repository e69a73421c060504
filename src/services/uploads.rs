// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Image upload storage on local disk.

use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// URL path under which stored uploads are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// A file written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Generated file name (no directory)
    pub filename: String,
    /// Public URL the file can be fetched from
    pub url: String,
    /// Number of bytes written
    pub size: usize,
}

/// Service that names, writes, and addresses uploaded files.
#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
    public_base_url: String,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| UploadError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Public URL for a stored file name.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}{}/{}", self.public_base_url, UPLOADS_ROUTE, filename)
    }

    /// Write `bytes` under a freshly generated name and return where it lives.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let filename = generate_filename(original_name, chrono::Utc::now().timestamp_millis());
        let path = self.dir.join(&filename);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| UploadError::Write {
                path: path.clone(),
                source,
            })?;

        if let Err(source) = write_all(&mut file, bytes).await {
            drop(file);
            // Don't leave a truncated file behind.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(UploadError::Write { path, source });
        }

        Ok(StoredUpload {
            url: self.url_for(&filename),
            filename,
            size: bytes.len(),
        })
    }
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

/// Build `<millis>-<uuid><.ext>` for an upload.
///
/// Only the extension of the client's file name survives, and only if it is
/// plain ASCII alphanumerics.
pub fn generate_filename(original_name: Option<&str>, millis: i64) -> String {
    let ext = original_name
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    let id = uuid::Uuid::new_v4();
    match ext {
        Some(ext) => format!("{millis}-{id}.{ext}"),
        None => format!("{millis}-{id}"),
    }
}

/// Errors from upload storage.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to create upload directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write upload {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
