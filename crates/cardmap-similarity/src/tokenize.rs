//! Word tokenization, stop words, and set overlap.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use cardmap_core::errors::SimilarityError;
use serde::{Deserialize, Serialize};

/// Minimum character count for a significant word.
pub const MIN_WORD_LEN: usize = 3;

const BUNDLED_STOP_WORDS: &str = include_str!("../dictionaries/stop_words.toml");

static BUNDLED: LazyLock<StopWords> = LazyLock::new(|| {
    StopWords::from_toml(BUNDLED_STOP_WORDS).expect("bundled stop-word list is valid TOML")
});

/// Words ignored by overlap scoring. Stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// The list shipped with the crate.
    pub fn bundled() -> &'static StopWords {
        &BUNDLED
    }

    /// Parse a `words = [...]` TOML list.
    pub fn from_toml(toml_str: &str) -> Result<Self, SimilarityError> {
        let parsed: Self = toml::from_str(toml_str).map_err(|e| SimilarityError::StopWordsParse {
            reason: e.to_string(),
        })?;
        Ok(Self::default().with_words(parsed.words))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimilarityError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SimilarityError::StopWordsParse {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    /// Add words, trimmed and lowercased. Blank entries are skipped.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Long enough, not numeric, not a stop word.
    pub fn is_significant(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LEN
            && !word.chars().all(|c| c.is_ascii_digit())
            && !self.contains(word)
    }

    /// Distinct significant lowercase words of `text`.
    pub fn significant_words(&self, text: &str) -> BTreeSet<String> {
        tokenize(text)
            .into_iter()
            .filter(|w| self.is_significant(w))
            .collect()
    }
}

/// Split on anything that is not alphanumeric and lowercase.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// [`StopWords::significant_words`] over the bundled list.
pub fn significant_words(text: &str) -> BTreeSet<String> {
    StopWords::bundled().significant_words(text)
}

pub fn is_significant(word: &str) -> bool {
    StopWords::bundled().is_significant(word)
}

/// Jaccard index |A ∩ B| / |A ∪ B|. Two empty sets score 0.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
