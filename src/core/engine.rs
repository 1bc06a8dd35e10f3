//! Pure filtering, sorting and pagination over the loaded entry set.
//! Recomputed on every toggle, so no side effects and no shared state.

use crate::domain::model::{Entry, FilterState, SortKey, SortState};
use crate::domain::tags::{Api, Language};
use std::cmp::Ordering;

/// Entries shown per page; callers grow the limit in these steps.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub entries: Vec<Entry>,
    /// Whether the filtered sequence extends beyond the requested limit.
    pub more: bool,
}

/// Filter predicate: all selected APIs present, at least one selected
/// language present (or no language filter), and a marketplace listing when
/// required.
pub fn matches(entry: &Entry, filter: &FilterState) -> bool {
    if !filter.apis.iter().all(|api| entry.apis.contains(api)) {
        return false;
    }

    let contains_language = filter.languages.is_empty()
        || filter
            .languages
            .iter()
            .any(|language| entry.languages.contains(language));
    if !contains_language {
        return false;
    }

    if filter.marketplace_only && entry.marketplace.is_none() {
        return false;
    }

    true
}

/// Produces the filtered, sorted view of `entries`. With `SortKey::None` the
/// input order is left untouched. Sorting is stable and descending order
/// reverses the comparator, not the sequence, so ties keep their input order
/// either way.
pub fn apply(entries: &[Entry], filter: &FilterState, sort: &SortState) -> Vec<Entry> {
    let mut out: Vec<Entry> = entries
        .iter()
        .filter(|entry| matches(entry, filter))
        .cloned()
        .collect();

    match sort.key {
        SortKey::None => {}
        SortKey::Github => out.sort_by(|a, b| oriented(cmp_github(a, b), sort.ascending)),
        SortKey::Added => out.sort_by(|a, b| oriented(a.added.cmp(&b.added), sort.ascending)),
    }

    out
}

/// Takes the first `limit` entries and reports whether more were available.
pub fn paginate(filtered: Vec<Entry>, limit: usize) -> Page {
    let more = filtered.len() > limit;
    let mut entries = filtered;
    entries.truncate(limit);
    Page { entries, more }
}

/// Distinct APIs across the entry set, sorted by tag. Feeds the filter bar.
pub fn all_apis(entries: &[Entry]) -> Vec<Api> {
    let mut out: Vec<Api> = Vec::new();
    for entry in entries {
        for api in &entry.apis {
            if !out.contains(api) {
                out.push(*api);
            }
        }
    }
    out.sort_by_key(|api| api.key());
    out
}

/// Distinct languages across the entry set, sorted by display name.
pub fn all_languages(entries: &[Entry]) -> Vec<Language> {
    let mut out: Vec<Language> = Vec::new();
    for entry in entries {
        for language in &entry.languages {
            if !out.contains(language) {
                out.push(*language);
            }
        }
    }
    out.sort_by_key(|language| language.display_name());
    out
}

fn cmp_github(a: &Entry, b: &Entry) -> Ordering {
    // case-insensitive compare over the owner/repo identifier
    a.github.to_lowercase().cmp(&b.github.to_lowercase())
}

fn oriented(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn entry(github: &str, apis: &[Api], languages: &[Language]) -> Entry {
        Entry {
            github: github.to_string(),
            apis: apis.to_vec(),
            languages: languages.to_vec(),
            marketplace: None,
            added: None,
        }
    }

    fn added(entry: Entry, timestamp: &str) -> Entry {
        Entry {
            added: Some(DateTime::parse_from_rfc3339(timestamp).unwrap()),
            ..entry
        }
    }

    #[test]
    fn test_api_filter_requires_all_selected() {
        let entries = vec![
            entry("a/one", &[Api::Drive], &[]),
            entry("a/two", &[Api::Drive, Api::Gmail], &[]),
        ];
        let filter = FilterState {
            apis: vec![Api::Drive, Api::Gmail],
            ..Default::default()
        };

        let result = apply(&entries, &filter, &SortState::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].github, "a/two");
    }

    #[test]
    fn test_language_filter_requires_any_selected() {
        let entries = vec![
            entry("a/go", &[], &[Language::Go]),
            entry("a/rust", &[], &[Language::Rust]),
            entry("a/java", &[], &[Language::Java]),
        ];
        let filter = FilterState {
            languages: vec![Language::Go, Language::Rust],
            ..Default::default()
        };

        let result = apply(&entries, &filter, &SortState::default());
        let ids: Vec<&str> = result.iter().map(|e| e.github.as_str()).collect();
        assert_eq!(ids, vec!["a/go", "a/rust"]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let entries = vec![
            entry("a/one", &[Api::Chat], &[Language::Kotlin]),
            entry("a/two", &[], &[]),
        ];
        let result = apply(&entries, &FilterState::default(), &SortState::default());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_marketplace_filter_excludes_unlisted() {
        let mut listed = entry("a/listed", &[], &[]);
        listed.marketplace = Some("https://workspace.google.com/marketplace/app/x".to_string());
        let entries = vec![listed, entry("a/unlisted", &[], &[])];
        let filter = FilterState {
            marketplace_only: true,
            ..Default::default()
        };

        let result = apply(&entries, &filter, &SortState::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].github, "a/listed");
    }

    #[test]
    fn test_sort_none_keeps_input_order() {
        let entries = vec![entry("b/x", &[], &[]), entry("a/x", &[], &[])];
        let result = apply(&entries, &FilterState::default(), &SortState::default());
        let ids: Vec<&str> = result.iter().map(|e| e.github.as_str()).collect();
        assert_eq!(ids, vec!["b/x", "a/x"]);
    }

    #[test]
    fn test_sort_by_github_is_case_insensitive() {
        let entries = vec![
            entry("Zebra/tool", &[], &[]),
            entry("apple/tool", &[], &[]),
            entry("Mango/tool", &[], &[]),
        ];
        let sort = SortState {
            key: SortKey::Github,
            ascending: true,
        };
        let result = apply(&entries, &FilterState::default(), &sort);
        let ids: Vec<&str> = result.iter().map(|e| e.github.as_str()).collect();
        assert_eq!(ids, vec!["apple/tool", "Mango/tool", "Zebra/tool"]);
    }

    #[test]
    fn test_sort_by_added_is_chronological() {
        let entries = vec![
            added(entry("a/new", &[], &[]), "2023-06-01T00:00:00+00:00"),
            added(entry("a/old", &[], &[]), "2021-01-15T00:00:00+00:00"),
            entry("a/undated", &[], &[]),
        ];
        let sort = SortState {
            key: SortKey::Added,
            ascending: true,
        };
        let result = apply(&entries, &FilterState::default(), &sort);
        let ids: Vec<&str> = result.iter().map(|e| e.github.as_str()).collect();
        // entries without history sort before any dated entry
        assert_eq!(ids, vec!["a/undated", "a/old", "a/new"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_added_dates() {
        let stamp = "2022-03-03T12:00:00+00:00";
        let entries = vec![
            added(entry("a/first", &[], &[]), stamp),
            added(entry("a/second", &[], &[]), stamp),
            added(entry("a/third", &[], &[]), stamp),
        ];

        for ascending in [true, false] {
            let sort = SortState {
                key: SortKey::Added,
                ascending,
            };
            let result = apply(&entries, &FilterState::default(), &sort);
            let ids: Vec<&str> = result.iter().map(|e| e.github.as_str()).collect();
            assert_eq!(ids, vec!["a/first", "a/second", "a/third"]);
        }
    }

    #[test]
    fn test_descending_reverses_comparator() {
        let entries = vec![
            added(entry("a/old", &[], &[]), "2021-01-15T00:00:00+00:00"),
            added(entry("a/new", &[], &[]), "2023-06-01T00:00:00+00:00"),
        ];
        let sort = SortState {
            key: SortKey::Added,
            ascending: false,
        };
        let result = apply(&entries, &FilterState::default(), &sort);
        assert_eq!(result[0].github, "a/new");
    }

    #[test]
    fn test_pagination_signals_more() {
        let entries: Vec<Entry> = (0..15)
            .map(|i| entry(&format!("owner/repo{}", i), &[], &[]))
            .collect();

        let page = paginate(entries.clone(), PAGE_SIZE);
        assert_eq!(page.entries.len(), 12);
        assert!(page.more);

        let page = paginate(entries, PAGE_SIZE * 2);
        assert_eq!(page.entries.len(), 15);
        assert!(!page.more);
    }

    #[test]
    fn test_all_apis_and_languages_are_sorted_and_distinct() {
        let entries = vec![
            entry("a/one", &[Api::Gmail, Api::Drive], &[Language::Rust]),
            entry("a/two", &[Api::Drive], &[Language::CSharp, Language::Rust]),
        ];
        assert_eq!(all_apis(&entries), vec![Api::Drive, Api::Gmail]);
        assert_eq!(
            all_languages(&entries),
            vec![Language::CSharp, Language::Rust]
        );
    }
}
