use crate::domain::model::{Descriptor, Entry};
use crate::domain::ports::History;
use crate::utils::error::{CatalogError, Result};
use std::path::Path;

/// What to do with a record that fails to parse. Deployment policy, not part
/// of the loading contract itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log a warning and keep loading the rest of the directory.
    Skip,
    /// Abort the whole load on the first bad record.
    Fail,
}

pub struct EntryLoader<H: History> {
    history: H,
    policy: MalformedPolicy,
}

impl<H: History> EntryLoader<H> {
    pub fn new(history: H, policy: MalformedPolicy) -> Self {
        Self { history, policy }
    }

    /// Reads every descriptor record under `dir` and returns the normalized
    /// entries. Result order is unspecified; callers that care about display
    /// order must sort or shuffle themselves.
    pub async fn load(&self, dir: &Path) -> Result<Vec<Entry>> {
        let mut reader = tokio::fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(file) = reader.next_entry().await? {
            if !file.file_type().await?.is_file() {
                continue;
            }
            let path = file.path();
            match self.load_one(&path).await {
                Ok(entry) => entries.push(entry),
                Err(err) => match self.policy {
                    MalformedPolicy::Fail => return Err(err),
                    MalformedPolicy::Skip => {
                        tracing::warn!("skipping {}: {}", path.display(), err);
                    }
                },
            }
        }

        Ok(entries)
    }

    async fn load_one(&self, path: &Path) -> Result<Entry> {
        let file = path.display().to_string();
        let raw = tokio::fs::read_to_string(path).await?;

        let descriptor: Descriptor =
            serde_json::from_str(&raw).map_err(|e| CatalogError::MalformedDescriptor {
                file: file.clone(),
                reason: e.to_string(),
            })?;
        validate_github(&file, &descriptor.github)?;

        // provenance is best effort, a record without history still loads
        let added = match self.history.first_added(path).await {
            Ok(timestamp) => Some(timestamp),
            Err(err) => {
                tracing::debug!("no added date for {}: {}", file, err);
                None
            }
        };

        Ok(Entry {
            github: descriptor.github,
            apis: descriptor.apis.into_set(),
            languages: descriptor.languages.into_set(),
            marketplace: descriptor.marketplace,
            added,
        })
    }
}

fn validate_github(file: &str, github: &str) -> Result<()> {
    let well_formed = matches!(
        github.split_once('/'),
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty()
    );
    if well_formed {
        Ok(())
    } else {
        Err(CatalogError::MalformedDescriptor {
            file: file.to_string(),
            reason: format!("github must be \"owner/repo\", got {:?}", github),
        })
    }
}
