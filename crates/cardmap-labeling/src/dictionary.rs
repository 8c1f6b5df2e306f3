//! Tag, keyword, and bigram label dictionaries loaded from TOML.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use cardmap_core::errors::LabelingError;
use serde::{Deserialize, Serialize};

const BUNDLED: &str = include_str!("../dictionaries/default.toml");

/// Generic labels used when no keyword or tag strategy applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackLabels {
    pub large: String,
    pub medium: String,
    pub small: String,
    /// Used when label generation itself fails.
    pub error: String,
}

impl Default for FallbackLabels {
    fn default() -> Self {
        Self {
            large: "Large Group".to_string(),
            medium: "Related Cards".to_string(),
            small: "Small Group".to_string(),
            error: "Cluster".to_string(),
        }
    }
}

/// Display labels and extra stop words. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelDictionary {
    pub stop_words: BTreeSet<String>,
    pub tags: BTreeMap<String, String>,
    pub keywords: BTreeMap<String, String>,
    /// Keyed `"first+second"`; either order matches.
    pub bigrams: BTreeMap<String, String>,
    pub fallback: FallbackLabels,
}

impl LabelDictionary {
    /// The dictionary shipped with the crate.
    pub fn bundled() -> Result<Self, LabelingError> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LabelingError> {
        let parsed: Self = toml::from_str(toml_str).map_err(|e| LabelingError::DictionaryParse {
            reason: e.to_string(),
        })?;
        Ok(parsed.normalized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabelingError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LabelingError::DictionaryParse {
                reason: format!("{}: {}", path.display(), e),
            })?;
        Self::from_toml(&content)
    }

    pub fn tag_label(&self, tag: &str) -> Option<&str> {
        self.tags.get(&tag.trim().to_lowercase()).map(String::as_str)
    }

    pub fn keyword_label(&self, keyword: &str) -> Option<&str> {
        self.keywords
            .get(&keyword.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn bigram_label(&self, first: &str, second: &str) -> Option<&str> {
        let (a, b) = (first.to_lowercase(), second.to_lowercase());
        self.bigrams
            .get(&format!("{a}+{b}"))
            .or_else(|| self.bigrams.get(&format!("{b}+{a}")))
            .map(String::as_str)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn normalized(self) -> Self {
        let lower_keys = |map: BTreeMap<String, String>| {
            map.into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect()
        };
        Self {
            stop_words: self
                .stop_words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .collect(),
            tags: lower_keys(self.tags),
            keywords: lower_keys(self.keywords),
            bigrams: lower_keys(self.bigrams),
            fallback: self.fallback,
        }
    }
}

/// "dark-mode" → "Dark Mode".
pub fn title_case(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dictionary_parses() {
        let dict = LabelDictionary::bundled().unwrap();
        assert_eq!(dict.tag_label("UX"), Some("User Experience"));
        assert_eq!(dict.tag_label("infra"), Some("Infrastructure"));
        assert!(dict.is_stop_word("todo"));
        assert_eq!(dict.fallback.error, "Unlabeled Group");
    }

    #[test]
    fn bigram_lookup_ignores_order() {
        let dict = LabelDictionary::bundled().unwrap();
        assert_eq!(dict.bigram_label("password", "login"), Some("Account Access"));
        assert_eq!(dict.bigram_label("login", "password"), Some("Account Access"));
        assert_eq!(dict.bigram_label("login", "banana"), None);
    }

    #[test]
    fn keys_are_lowercased_on_load() {
        let dict = LabelDictionary::from_toml("[tags]\nUX = \"Design\"\n").unwrap();
        assert_eq!(dict.tag_label("ux"), Some("Design"));
        assert_eq!(dict.fallback, FallbackLabels::default());
    }

    #[test]
    fn malformed_dictionary_is_a_parse_error() {
        let err = LabelDictionary::from_toml("[tags\n").unwrap_err();
        assert!(matches!(err, LabelingError::DictionaryParse { .. }));
    }

    #[test]
    fn title_case_splits_separators() {
        assert_eq!(title_case("dark-mode"), "Dark Mode");
        assert_eq!(title_case("on_call rota"), "On Call Rota");
    }
}
