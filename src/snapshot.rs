//! Forecast snapshot persistence
//!
//! Every answered forecast is also written to disk so other processes can
//! pick up the latest result. Each write goes to a sibling temporary file
//! that is then renamed over the target, so readers only ever see a complete
//! snapshot. Concurrent requests overwrite each other; the last rename wins.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::error::KisanError;
use crate::models::ForecastResponse;

#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Persist the response, replacing any previous snapshot
    async fn write(&self, response: &ForecastResponse) -> Result<(), KisanError>;
}

/// Writes the response as indented UTF-8 JSON to a fixed file
#[derive(Debug, Clone)]
pub struct FileSnapshotSink {
    path: PathBuf,
}

impl FileSnapshotSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique sibling of the target, so the final rename stays on one filesystem
    fn staging_path(&self) -> PathBuf {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.{id}.tmp", std::process::id()))
    }
}

#[async_trait]
impl SnapshotSink for FileSnapshotSink {
    #[tracing::instrument(name = "write_snapshot", level = "debug", skip_all)]
    async fn write(&self, response: &ForecastResponse) -> Result<(), KisanError> {
        // serde_json leaves non-ASCII characters unescaped
        let bytes = serde_json::to_vec_pretty(response)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                KisanError::snapshot(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let staging = self.staging_path();
        tokio::fs::write(&staging, &bytes).await.map_err(|e| {
            KisanError::snapshot(format!("Failed to write {}: {e}", staging.display()))
        })?;

        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(KisanError::snapshot(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            )));
        }

        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}
