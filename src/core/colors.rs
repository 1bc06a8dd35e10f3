//! Builds the language color map from the linguist languages document.

use crate::domain::model::ColorMap;
use crate::domain::ports::ColorSource;
use crate::domain::tags::Language;
use crate::utils::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct LinguistRecord {
    #[serde(default)]
    color: Option<String>,
}

/// Fetches and filters the external color document. Colors are cosmetic, so
/// any fetch or parse failure degrades to an empty map instead of failing the
/// build.
pub async fn build_color_map<C: ColorSource>(source: &C) -> ColorMap {
    match load_color_map(source).await {
        Ok(colors) => colors,
        Err(err) => {
            tracing::warn!("rendering without language colors: {}", err);
            ColorMap::new()
        }
    }
}

async fn load_color_map<C: ColorSource>(source: &C) -> Result<ColorMap> {
    let raw = source.fetch().await?;
    parse_color_map(&raw)
}

/// Keeps only keys that exactly match a language display name and carry a
/// non-empty color.
fn parse_color_map(raw: &str) -> Result<ColorMap> {
    let document: BTreeMap<String, LinguistRecord> =
        serde_yaml::from_str(raw).map_err(|e| CatalogError::ColorSourceUnavailable {
            reason: e.to_string(),
        })?;

    let mut colors = ColorMap::new();
    for (name, record) in document {
        let Some(language) = Language::from_display(&name) else {
            continue;
        };
        if let Some(color) = record.color {
            if !color.is_empty() {
                colors.insert(language, color);
            }
        }
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
C#:
  type: programming
  color: "#178600"
Go:
  type: programming
  color: "#00ADD8"
  extensions:
  - ".go"
Gosu:
  type: programming
  color: "#82937f"
HolyC:
  type: programming
Shell:
  type: programming
  color: "#89e051"
"##;

    #[test]
    fn test_parse_keeps_only_known_languages_with_colors() {
        let colors = parse_color_map(SAMPLE).unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[&Language::CSharp], "#178600");
        assert_eq!(colors[&Language::Go], "#00ADD8");
        assert_eq!(colors[&Language::Shell], "#89e051");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_color_map("][ not yaml ][").is_err());
    }
}
