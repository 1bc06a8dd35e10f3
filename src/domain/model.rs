use crate::domain::tags::{Api, Language};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw descriptor record as authored in the data directory, one JSON file per
/// project. `apis` and `languages` may be a single value or an array; `added`
/// is never authored, it is derived from history at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    pub github: String,
    #[serde(default)]
    pub apis: OneOrMany<Api>,
    #[serde(default)]
    pub languages: OneOrMany<Language>,
    #[serde(default)]
    pub marketplace: Option<String>,
}

/// Scalar-or-collection shape used by descriptor fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T: PartialEq> OneOrMany<T> {
    /// Normalizes to a duplicate-free collection, keeping first occurrence
    /// order.
    pub fn into_set(self) -> Vec<T> {
        let raw = match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        };
        let mut out = Vec::with_capacity(raw.len());
        for value in raw {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }
}

/// One cataloged project, normalized and enriched. `github` is the unique key
/// within a load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub github: String,
    pub apis: Vec<Api>,
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
    pub added: Option<DateTime<FixedOffset>>,
}

/// Active filters for one view, reconstructed from the query string on every
/// request and never mutated in place. Selection order is preserved so that
/// encode/decode cycles are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// AND semantics: an entry must carry every selected API.
    pub apis: Vec<Api>,
    /// OR semantics: an entry must carry at least one selected language,
    /// unless empty.
    pub languages: Vec<Language>,
    pub marketplace_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Leave the caller-supplied order untouched.
    #[default]
    None,
    Github,
    Added,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: SortKey::None,
            ascending: true,
        }
    }
}

/// Language display color lookup, built once per render from the external
/// source. Cosmetic only.
pub type ColorMap = BTreeMap<Language, String>;

/// The build artifact consumed by the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub entries: Vec<Entry>,
    pub colors: ColorMap,
}
