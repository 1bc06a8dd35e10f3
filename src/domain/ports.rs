use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::path::Path;

/// Version-control provenance lookup for a descriptor file.
#[async_trait]
pub trait History: Send + Sync {
    /// Timestamp of the revision that first introduced `path`, or
    /// `HistoryUnavailable` if the file has no recorded history.
    async fn first_added(&self, path: &Path) -> Result<DateTime<FixedOffset>>;
}

/// External document feeding the language color map.
#[async_trait]
pub trait ColorSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn colors_url(&self) -> &str;
    /// Whether a malformed descriptor fails the build instead of being
    /// skipped with a warning.
    fn strict(&self) -> bool;
}
