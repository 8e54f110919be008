//! Filesystem sink for downloaded documents

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jurisrem_core::DownloadSink;
use jurisrem_domain::{JurisError, Result};
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::io_error;

const FALLBACK_FILE_NAME: &str = "documento";

/// Writes downloads into a directory.
///
/// Content goes to a temporary file in the target directory first and is
/// renamed into place, so a failed write never leaves a partial file.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    directory: PathBuf,
}

impl DirectoryDownloadSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Keep only the final path component and drop characters that are not
/// valid in file names on common platforms.
fn sanitize_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = last
        .chars()
        .map(|c| if c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') { '_' } else { c })
        .collect();

    match cleaned.trim() {
        "" | "." | ".." => FALLBACK_FILE_NAME.to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn write_atomically(directory: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).map_err(|e| io_error("Failed to create download directory", e))?;

    let target = directory.join(file_name);
    let mut temp = NamedTempFile::new_in(directory).map_err(|e| io_error("Failed to create temporary file", e))?;
    temp.write_all(content).map_err(|e| io_error("Failed to write download", e))?;
    temp.persist(&target).map_err(|e| io_error("Failed to save download", e.error))?;

    Ok(target)
}

#[async_trait]
impl DownloadSink for DirectoryDownloadSink {
    async fn save(&self, file_name: &str, content: Vec<u8>) -> Result<PathBuf> {
        let directory = self.directory.clone();
        let file_name = sanitize_file_name(file_name);
        let size = content.len();

        let path = tokio::task::spawn_blocking(move || write_atomically(&directory, &file_name, &content))
            .await
            .map_err(|e| JurisError::Operation(format!("spawn_blocking failed: {}", e)))??;

        info!(path = %path.display(), size, "Document saved");
        Ok(path)
    }
}
