use crate::domain::ports::History;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use tokio::process::Command;

/// Derives the "added" date of a descriptor from git: the author date of the
/// revision that first introduced the file, following renames.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHistory;

#[async_trait]
impl History for GitHistory {
    async fn first_added(&self, path: &Path) -> Result<DateTime<FixedOffset>> {
        let file = path.display().to_string();

        let output = Command::new("git")
            .arg("log")
            .arg("--diff-filter=A")
            .arg("--follow")
            .arg("--format=%aI")
            .arg("-1")
            .arg("--")
            .arg(path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(CatalogError::HistoryUnavailable { file });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stamp = stdout.trim();
        if stamp.is_empty() {
            return Err(CatalogError::HistoryUnavailable { file });
        }

        DateTime::parse_from_rfc3339(stamp)
            .map_err(|_| CatalogError::HistoryUnavailable { file })
    }
}
