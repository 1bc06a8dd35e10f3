use crate::adapters::{GitHistory, LinguistColors};
use crate::core::colors::build_color_map;
use crate::core::loader::{EntryLoader, MalformedPolicy};
use crate::domain::model::Catalog;
use crate::domain::ports::{ColorSource, ConfigProvider, History};
use crate::utils::error::Result;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// One-shot build of the catalog artifact: load all descriptors, shuffle,
/// attach the color map.
pub struct CatalogBuilder<H: History, C: ColorSource> {
    loader: EntryLoader<H>,
    colors: C,
}

impl CatalogBuilder<GitHistory, LinguistColors> {
    /// Production wiring: git provenance, linguist colors, malformed policy
    /// from the strict flag.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let policy = if config.strict() {
            MalformedPolicy::Fail
        } else {
            MalformedPolicy::Skip
        };
        Self {
            loader: EntryLoader::new(GitHistory, policy),
            colors: LinguistColors::new(config.colors_url()),
        }
    }
}

impl<H: History, C: ColorSource> CatalogBuilder<H, C> {
    pub fn new(loader: EntryLoader<H>, colors: C) -> Self {
        Self { loader, colors }
    }

    pub async fn build(&self, data_dir: &Path) -> Result<Catalog> {
        tracing::info!("loading descriptors from {}", data_dir.display());
        let mut entries = self.loader.load(data_dir).await?;
        tracing::info!("loaded {} entries", entries.len());

        // randomize entries before first display
        entries.shuffle(&mut rand::thread_rng());

        let colors = build_color_map(&self.colors).await;
        tracing::info!("resolved colors for {} languages", colors.len());

        Ok(Catalog { entries, colors })
    }

    /// Writes the artifact as pretty-printed JSON, creating parent
    /// directories as needed.
    pub async fn write(&self, catalog: &Catalog, output_path: &Path) -> Result<PathBuf> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(catalog)?;
        tokio::fs::write(output_path, json).await?;
        Ok(output_path.to_path_buf())
    }
}
