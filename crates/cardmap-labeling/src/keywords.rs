//! Keyword extraction for cluster labels.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use cardmap_core::models::Card;
use cardmap_similarity::tokenize;
use regex::Regex;

use crate::dictionary::LabelDictionary;
use crate::outliers::{boilerplate_mask, zscores};

const NOISE_PATTERN: &str =
    r"(?i)https?://\S+|www\.\S+|[\w.+-]+@[\w-]+\.[\w.-]+|@\w+|\b\d+(?:[.,:]\d+)*\b";
const SENTENCE_PATTERN: &str = r"[.!?;\n]+";

static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NOISE_PATTERN).expect("noise pattern is a valid regex"));
static SENTENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENTENCE_PATTERN).expect("sentence pattern is a valid regex"));

/// Fraction of capitalised words at which a sentence counts as headline-cased.
const HEADLINE_RATIO: f64 = 0.5;

/// Frequency statistics for one term across a cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordStat {
    pub term: String,
    /// Total occurrences across all members.
    pub frequency: usize,
    /// Number of members containing the term.
    pub document_frequency: usize,
}

/// Ranked keywords plus the terms dropped as boilerplate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordAnalysis {
    /// Frequency descending, then document frequency descending, then term.
    pub ranked: Vec<KeywordStat>,
    pub excluded: Vec<KeywordStat>,
}

impl KeywordAnalysis {
    pub fn top(&self) -> Option<&KeywordStat> {
        self.ranked.first()
    }
}

/// Tokenizes card text into candidate label terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Candidate terms of one text, in order of appearance.
    ///
    /// URLs, emails, numbers, and mentions are stripped. Capitalised words that do not
    /// start a sentence are treated as proper nouns unless the sentence is headline-cased.
    pub fn terms(&self, text: &str, dictionary: &LabelDictionary) -> Vec<String> {
        let cleaned = NOISE.replace_all(text, " ");
        let mut out = Vec::new();
        for sentence in SENTENCES.split(&cleaned) {
            let words: Vec<&str> = sentence
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .collect();
            if words.is_empty() {
                continue;
            }
            let capitalised = words.iter().filter(|w| starts_uppercase(w)).count();
            let headline = capitalised as f64 >= HEADLINE_RATIO * words.len() as f64;

            for (i, word) in words.iter().enumerate() {
                if !headline && i > 0 && starts_uppercase(word) {
                    continue;
                }
                let lower = word.to_lowercase();
                if tokenize::is_significant(&lower) && !dictionary.is_stop_word(&lower) {
                    out.push(lower);
                }
            }
        }
        out
    }

    /// Term statistics over a cluster, with boilerplate terms moved to `excluded`.
    pub fn analyze(&self, cards: &[&Card], dictionary: &LabelDictionary) -> KeywordAnalysis {
        let mut frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for card in cards {
            let terms = self.terms(&card.full_text(), dictionary);
            let distinct: BTreeSet<&String> = terms.iter().collect();
            for term in &distinct {
                *document_frequency.entry((*term).clone()).or_insert(0) += 1;
            }
            for term in &terms {
                *frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let stats: Vec<KeywordStat> = frequency
            .into_iter()
            .map(|(term, freq)| {
                let df = document_frequency.get(&term).copied().unwrap_or(0);
                KeywordStat {
                    term,
                    frequency: freq,
                    document_frequency: df,
                }
            })
            .collect();

        let values: Vec<f64> = stats.iter().map(|s| s.frequency as f64).collect();
        let mask = boilerplate_mask(&values);

        let mut analysis = KeywordAnalysis::default();
        for (stat, excluded) in stats.into_iter().zip(mask) {
            if excluded {
                analysis.excluded.push(stat);
            } else {
                analysis.ranked.push(stat);
            }
        }
        analysis.ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then(b.document_frequency.cmp(&a.document_frequency))
                .then_with(|| a.term.cmp(&b.term))
        });

        if !analysis.excluded.is_empty() {
            tracing::debug!(
                excluded = analysis.excluded.len(),
                kept = analysis.ranked.len(),
                "dropped boilerplate terms"
            );
        }
        analysis
    }
}

/// Z-scores of the term frequencies of `stats`, in the order given.
pub fn frequency_zscores(stats: &[KeywordStat]) -> Vec<f64> {
    let values: Vec<f64> = stats.iter().map(|s| s.frequency as f64).collect();
    zscores(&values)
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new()
    }

    #[test]
    fn strips_urls_emails_numbers_and_mentions() {
        let dict = LabelDictionary::default();
        let terms = extractor().terms(
            "see https://example.com/x and mail ops@example.com about 404 errors, @sam",
            &dict,
        );
        assert_eq!(terms, vec!["see", "mail", "errors"]);
    }

    #[test]
    fn drops_proper_nouns_in_regular_sentences() {
        let dict = LabelDictionary::default();
        let terms = extractor().terms("Customers from Acme report slow exports", &dict);
        assert_eq!(terms, vec!["customers", "report", "slow", "exports"]);
    }

    #[test]
    fn keeps_capitalised_words_in_headlines() {
        let dict = LabelDictionary::default();
        let terms = extractor().terms("Slow Export Jobs", &dict);
        assert_eq!(terms, vec!["slow", "export", "jobs"]);
    }

    #[test]
    fn dictionary_stop_words_are_removed() {
        let dict = LabelDictionary::bundled().unwrap();
        let terms = extractor().terms("todo: export notes", &dict);
        assert_eq!(terms, vec!["export"]);
    }
}
