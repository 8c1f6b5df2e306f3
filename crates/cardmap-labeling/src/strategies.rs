//! The ordered label strategy chain. Earlier strategies win; later matches become alternatives.

use std::collections::BTreeMap;

use cardmap_core::models::{Card, LabelStrategy};

use crate::dictionary::{title_case, LabelDictionary};
use crate::keywords::{KeywordAnalysis, KeywordStat};

pub(crate) const TAG_COVERAGE_MIN: f64 = 0.6;
const TAG_BASE_CONFIDENCE: f64 = 0.85;
const TAG_COVERAGE_BONUS: f64 = 0.25;
const TAG_MAX_CONFIDENCE: f64 = 0.95;

const PAIR_CONFIDENCE: f64 = 0.75;
const PAIR_MEMBER_SHARE: f64 = 0.4;
const PAIR_MAX_CHARS: usize = 25;

const CO_OCCURRENCE_CONFIDENCE: f64 = 0.7;
/// Three members give at least two member pairs sharing the term.
const CO_OCCURRENCE_MIN_MEMBERS: usize = 3;

const TOP_KEYWORD_CONFIDENCE: f64 = 0.6;
const TOP_KEYWORD_MIN_FREQUENCY: usize = 2;

const LARGE_CLUSTER: usize = 10;
const MEDIUM_CLUSTER: usize = 5;
const LARGE_CONFIDENCE: f64 = 0.4;
const MEDIUM_CONFIDENCE: f64 = 0.3;
const SMALL_CONFIDENCE: f64 = 0.2;
pub(crate) const ERROR_CONFIDENCE: f64 = 0.1;

/// One strategy's proposal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub text: String,
    pub confidence: f64,
    pub strategy: LabelStrategy,
    pub reasoning: String,
}

pub(crate) struct LabelContext<'a> {
    pub cards: &'a [&'a Card],
    pub keywords: &'a KeywordAnalysis,
    pub dictionary: &'a LabelDictionary,
}

impl LabelContext<'_> {
    fn size(&self) -> usize {
        self.cards.len()
    }

    fn keyword_text(&self, stat: &KeywordStat) -> String {
        self.dictionary
            .keyword_label(&stat.term)
            .map(str::to_string)
            .unwrap_or_else(|| title_case(&stat.term))
    }
}

/// Every matching candidate, best first. The size fallback always matches, so this is never empty.
pub(crate) fn candidates(ctx: &LabelContext<'_>) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = [
        shared_tag(ctx),
        keyword_pair(ctx),
        co_occurrence(ctx),
        top_keyword(ctx),
    ]
    .into_iter()
    .flatten()
    .collect();
    out.push(size_fallback(ctx.size(), ctx.dictionary));
    out
}

/// Members per normalized tag, most common first, ties alphabetical.
pub(crate) fn tag_member_counts(cards: &[&Card]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for card in cards {
        for tag in card.normalized_tags() {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

fn shared_tag(ctx: &LabelContext<'_>) -> Option<Candidate> {
    let n = ctx.size();
    let (tag, count) = tag_member_counts(ctx.cards).into_iter().next()?;
    let coverage = count as f64 / n as f64;
    if coverage < TAG_COVERAGE_MIN {
        return None;
    }
    let text = ctx
        .dictionary
        .tag_label(&tag)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(&tag));
    let confidence =
        (TAG_BASE_CONFIDENCE + TAG_COVERAGE_BONUS * (coverage - TAG_COVERAGE_MIN)).min(TAG_MAX_CONFIDENCE);
    Some(Candidate {
        text,
        confidence,
        strategy: LabelStrategy::SharedTag,
        reasoning: format!("tag '{tag}' is shared by {count} of {n} cards"),
    })
}

fn keyword_pair(ctx: &LabelContext<'_>) -> Option<Candidate> {
    let n = ctx.size();
    let [first, second] = match ctx.keywords.ranked.as_slice() {
        [a, b, ..] => [a, b],
        _ => return None,
    };
    let min_members = usize::max(2, (PAIR_MEMBER_SHARE * n as f64).ceil() as usize);
    if first.document_frequency < min_members || second.document_frequency < min_members {
        return None;
    }
    let text = match ctx.dictionary.bigram_label(&first.term, &second.term) {
        Some(label) => label.to_string(),
        None => format!("{} & {}", title_case(&first.term), title_case(&second.term)),
    };
    if text.chars().count() > PAIR_MAX_CHARS {
        return None;
    }
    Some(Candidate {
        text,
        confidence: PAIR_CONFIDENCE,
        strategy: LabelStrategy::KeywordPair,
        reasoning: format!(
            "keywords '{}' and '{}' appear in {} and {} of {n} cards",
            first.term, second.term, first.document_frequency, second.document_frequency
        ),
    })
}

fn co_occurrence(ctx: &LabelContext<'_>) -> Option<Candidate> {
    let stat = ctx
        .keywords
        .ranked
        .iter()
        .find(|s| s.document_frequency >= CO_OCCURRENCE_MIN_MEMBERS)?;
    Some(Candidate {
        text: ctx.keyword_text(stat),
        confidence: CO_OCCURRENCE_CONFIDENCE,
        strategy: LabelStrategy::CoOccurrence,
        reasoning: format!(
            "keyword '{}' recurs across {} cards",
            stat.term, stat.document_frequency
        ),
    })
}

fn top_keyword(ctx: &LabelContext<'_>) -> Option<Candidate> {
    let stat = ctx.keywords.top()?;
    if stat.frequency < TOP_KEYWORD_MIN_FREQUENCY {
        return None;
    }
    Some(Candidate {
        text: ctx.keyword_text(stat),
        confidence: TOP_KEYWORD_CONFIDENCE,
        strategy: LabelStrategy::TopKeyword,
        reasoning: format!(
            "most frequent keyword '{}' ({} occurrences)",
            stat.term, stat.frequency
        ),
    })
}

fn size_fallback(n: usize, dictionary: &LabelDictionary) -> Candidate {
    let (text, confidence) = if n >= LARGE_CLUSTER {
        (&dictionary.fallback.large, LARGE_CONFIDENCE)
    } else if n >= MEDIUM_CLUSTER {
        (&dictionary.fallback.medium, MEDIUM_CONFIDENCE)
    } else {
        (&dictionary.fallback.small, SMALL_CONFIDENCE)
    };
    Candidate {
        text: text.clone(),
        confidence,
        strategy: LabelStrategy::SizeFallback,
        reasoning: format!("no shared tag or keyword; generic label for {n} cards"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(term: &str, frequency: usize, document_frequency: usize) -> KeywordStat {
        KeywordStat {
            term: term.to_string(),
            frequency,
            document_frequency,
        }
    }

    #[test]
    fn shared_tag_confidence_grows_with_coverage() {
        let dict = LabelDictionary::default();
        let cards = [
            Card::new("a", "x").with_tags(["ops"]),
            Card::new("b", "y").with_tags(["ops"]),
            Card::new("c", "z").with_tags(["ops"]),
            Card::new("d", "w"),
            Card::new("e", "v"),
        ];
        let refs: Vec<&Card> = cards.iter().collect();
        let keywords = KeywordAnalysis::default();
        let ctx = LabelContext {
            cards: &refs,
            keywords: &keywords,
            dictionary: &dict,
        };
        let c = shared_tag(&ctx).unwrap();
        assert_eq!(c.text, "Ops");
        assert!((c.confidence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn long_pair_labels_are_rejected() {
        let dict = LabelDictionary::default();
        let cards = [Card::new("a", "x"), Card::new("b", "y")];
        let refs: Vec<&Card> = cards.iter().collect();
        let keywords = KeywordAnalysis {
            ranked: vec![stat("internationalization", 2, 2), stat("localization", 2, 2)],
            excluded: Vec::new(),
        };
        let ctx = LabelContext {
            cards: &refs,
            keywords: &keywords,
            dictionary: &dict,
        };
        assert!(keyword_pair(&ctx).is_none());
    }

    #[test]
    fn size_tiers() {
        let dict = LabelDictionary::default();
        assert_eq!(size_fallback(12, &dict).confidence, LARGE_CONFIDENCE);
        assert_eq!(size_fallback(5, &dict).confidence, MEDIUM_CONFIDENCE);
        assert_eq!(size_fallback(2, &dict).confidence, SMALL_CONFIDENCE);
    }
}
