use serde::{Deserialize, Serialize};

/// Closed set of Workspace API tags. Descriptor records and query parameters
/// both carry the snake_case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Api {
    Admin,
    AppsScript,
    Calendar,
    Chat,
    Classroom,
    CloudIdentity,
    Contacts,
    Docs,
    Drive,
    Forms,
    Gmail,
    CloudSearch,
    Groups,
    Keep,
    Sheets,
    Slides,
    Tasks,
    Vault,
}

impl Api {
    pub const ALL: [Api; 18] = [
        Api::Admin,
        Api::AppsScript,
        Api::Calendar,
        Api::Chat,
        Api::Classroom,
        Api::CloudIdentity,
        Api::Contacts,
        Api::Docs,
        Api::Drive,
        Api::Forms,
        Api::Gmail,
        Api::CloudSearch,
        Api::Groups,
        Api::Keep,
        Api::Sheets,
        Api::Slides,
        Api::Tasks,
        Api::Vault,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Api::Admin => "admin",
            Api::AppsScript => "apps_script",
            Api::Calendar => "calendar",
            Api::Chat => "chat",
            Api::Classroom => "classroom",
            Api::CloudIdentity => "cloud_identity",
            Api::Contacts => "contacts",
            Api::Docs => "docs",
            Api::Drive => "drive",
            Api::Forms => "forms",
            Api::Gmail => "gmail",
            Api::CloudSearch => "cloud_search",
            Api::Groups => "groups",
            Api::Keep => "keep",
            Api::Sheets => "sheets",
            Api::Slides => "slides",
            Api::Tasks => "tasks",
            Api::Vault => "vault",
        }
    }

    pub fn from_key(key: &str) -> Option<Api> {
        Api::ALL.iter().copied().find(|api| api.key() == key)
    }
}

impl std::fmt::Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Closed set of implementation languages. Each language has a canonical
/// snake_case key (used in query parameters, where `C/C++` or `C#` would not
/// survive) and a human display name (used in descriptor records and in the
/// rendered artifact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    COrCplusplus,
    CSharp,
    Go,
    Html,
    Java,
    JavaScript,
    Kotlin,
    Php,
    Python,
    ObjectiveC,
    Ruby,
    Rust,
    Shell,
    Swift,
    Other,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::COrCplusplus,
        Language::CSharp,
        Language::Go,
        Language::Html,
        Language::Java,
        Language::JavaScript,
        Language::Kotlin,
        Language::Php,
        Language::Python,
        Language::ObjectiveC,
        Language::Ruby,
        Language::Rust,
        Language::Shell,
        Language::Swift,
        Language::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Language::COrCplusplus => "c_or_cplusplus",
            Language::CSharp => "c_sharp",
            Language::Go => "go",
            Language::Html => "html",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Kotlin => "kotlin",
            Language::Php => "php",
            Language::Python => "python",
            Language::ObjectiveC => "objective_c",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Shell => "shell",
            Language::Swift => "swift",
            Language::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::COrCplusplus => "C/C++",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Html => "HTML",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Kotlin => "Kotlin",
            Language::Php => "PHP",
            Language::Python => "Python",
            Language::ObjectiveC => "Objective-C",
            Language::Ruby => "Ruby",
            Language::Rust => "Rust",
            Language::Shell => "Shell",
            Language::Swift => "Swift",
            Language::Other => "Other",
        }
    }

    /// Forward lookup by canonical key. Misses are the caller's problem
    /// (the query codec drops them).
    pub fn from_key(key: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|lang| lang.key() == key)
    }

    /// Exact lookup by display name, no fallback. Used where a miss must be
    /// distinguishable, e.g. filtering the color source.
    pub fn from_display(name: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.display_name() == name)
    }

    /// Reverse lookup for encoding: display name to canonical key, with an
    /// unknown display name coerced to `other`. Never fails.
    pub fn reverse(name: &str) -> Language {
        Language::from_display(name).unwrap_or(Language::Other)
    }
}

impl From<String> for Language {
    fn from(name: String) -> Self {
        Language::reverse(&name)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.display_name().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_roundtrip() {
        for api in Api::ALL {
            assert_eq!(Api::from_key(api.key()), Some(api));
        }
        assert_eq!(Api::from_key("spreadsheets"), None);
    }

    #[test]
    fn test_api_serde_uses_snake_case_key() {
        let json = serde_json::to_string(&Api::AppsScript).unwrap();
        assert_eq!(json, "\"apps_script\"");
        let api: Api = serde_json::from_str("\"cloud_search\"").unwrap();
        assert_eq!(api, Api::CloudSearch);
    }

    #[test]
    fn test_unknown_api_fails_to_parse() {
        assert!(serde_json::from_str::<Api>("\"Drive\"").is_err());
    }

    #[test]
    fn test_language_key_and_display_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_key(lang.key()), Some(lang));
            assert_eq!(Language::from_display(lang.display_name()), Some(lang));
        }
    }

    #[test]
    fn test_reverse_lookup_falls_back_to_other() {
        assert_eq!(Language::reverse("C#"), Language::CSharp);
        assert_eq!(Language::reverse("Brainfuck"), Language::Other);
    }

    #[test]
    fn test_language_serde_uses_display_name() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"C#\"");
        let lang: Language = serde_json::from_str("\"Objective-C\"").unwrap();
        assert_eq!(lang, Language::ObjectiveC);
        // unknown display names coerce instead of failing
        let lang: Language = serde_json::from_str("\"COBOL\"").unwrap();
        assert_eq!(lang, Language::Other);
    }
}
