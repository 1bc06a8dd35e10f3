//! Bidirectional mapping between the URL query string and the in-memory
//! filter/sort state. Decoding is forgiving: unrecognized values are dropped
//! with a debug log, never surfaced.

use crate::domain::model::{FilterState, SortKey, SortState};
use crate::domain::tags::{Api, Language};
use crate::utils::error::{CatalogError, Result};
use url::form_urlencoded;

/// Derives filter and sort state from a raw query string (leading `?`
/// optional). Repeated `apis`/`languages` parameters accumulate in the order
/// given, without duplicates.
pub fn decode(query: &str) -> (FilterState, SortState) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filter = FilterState::default();
    let mut sort = SortState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let parsed = match key.as_ref() {
            "apis" => decode_api(&value).map(|api| {
                if !filter.apis.contains(&api) {
                    filter.apis.push(api);
                }
            }),
            "languages" => decode_language(&value).map(|language| {
                if !filter.languages.contains(&language) {
                    filter.languages.push(language);
                }
            }),
            "marketplace" => decode_marketplace(&value).map(|flag| {
                filter.marketplace_only = flag;
            }),
            "sort" => decode_sort_key(&value).map(|sort_key| {
                sort.key = sort_key;
            }),
            "order" => decode_order(&value).map(|ascending| {
                sort.ascending = ascending;
            }),
            // unknown parameter names belong to the surrounding page
            _ => Ok(()),
        };

        if let Err(err) = parsed {
            tracing::debug!("dropping query parameter: {}", err);
        }
    }

    (filter, sort)
}

/// Encodes the filter state back into a query string. APIs keep their raw
/// tag; languages use the canonical key since display names like `C/C++` or
/// `C#` do not survive as bare tags. `marketplace` appears only when set, and
/// multi-valued parameters keep selection order so encode/decode cycles are
/// idempotent.
pub fn encode(filter: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for api in &filter.apis {
        serializer.append_pair("apis", api.key());
    }
    for language in &filter.languages {
        serializer.append_pair("languages", language.key());
    }
    if filter.marketplace_only {
        serializer.append_pair("marketplace", "true");
    }
    serializer.finish()
}

/// Link target for a filter combination.
pub fn filter_href(filter: &FilterState) -> String {
    format!("/?{}", encode(filter))
}

/// Pure toggle: removes the API if selected, appends it otherwise.
pub fn toggle_api(filter: &FilterState, api: Api) -> FilterState {
    let mut next = filter.clone();
    match next.apis.iter().position(|a| *a == api) {
        Some(index) => {
            next.apis.remove(index);
        }
        None => next.apis.push(api),
    }
    next
}

pub fn toggle_language(filter: &FilterState, language: Language) -> FilterState {
    let mut next = filter.clone();
    match next.languages.iter().position(|l| *l == language) {
        Some(index) => {
            next.languages.remove(index);
        }
        None => next.languages.push(language),
    }
    next
}

fn decode_api(value: &str) -> Result<Api> {
    Api::from_key(value).ok_or_else(|| CatalogError::InvalidQueryValue {
        key: "apis",
        value: value.to_string(),
    })
}

fn decode_language(value: &str) -> Result<Language> {
    Language::from_key(value).ok_or_else(|| CatalogError::InvalidQueryValue {
        key: "languages",
        value: value.to_string(),
    })
}

fn decode_marketplace(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        _ => Err(CatalogError::InvalidQueryValue {
            key: "marketplace",
            value: value.to_string(),
        }),
    }
}

fn decode_sort_key(value: &str) -> Result<SortKey> {
    match value {
        "github" => Ok(SortKey::Github),
        "added" => Ok(SortKey::Added),
        _ => Err(CatalogError::InvalidQueryValue {
            key: "sort",
            value: value.to_string(),
        }),
    }
}

fn decode_order(value: &str) -> Result<bool> {
    match value {
        "asc" => Ok(true),
        "desc" => Ok(false),
        _ => Err(CatalogError::InvalidQueryValue {
            key: "order",
            value: value.to_string(),
        }),
    }
}
