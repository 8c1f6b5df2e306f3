//! The non-semantic component scores. Each is in [0, 1]; missing data scores 0.

use std::collections::BTreeSet;

use cardmap_core::models::Card;

use crate::tokenize::{jaccard, StopWords};

const STRUCTURAL_TAG_SHARE: f64 = 0.7;
const STRUCTURAL_COLUMN_SHARE: f64 = 0.3;

const CONTENT_TITLE_SHARE: f64 = 0.6;
const CONTENT_BODY_SHARE: f64 = 0.4;

const SAME_AUTHOR_BONUS: f64 = 0.3;
const WITHIN_HOUR_BONUS: f64 = 0.4;
const WITHIN_DAY_BONUS: f64 = 0.2;
const HOUR_SECS: i64 = 3_600;
const DAY_SECS: i64 = 86_400;

/// Normalized tag set of a card.
pub fn tag_set(card: &Card) -> BTreeSet<String> {
    card.normalized_tags().into_iter().collect()
}

/// Tag overlap plus a same-column bonus.
pub fn structural(a: &Card, b: &Card) -> f64 {
    let tags = jaccard(&tag_set(a), &tag_set(b));
    let same_column = !a.column_type.trim().is_empty()
        && a.column_type.trim().eq_ignore_ascii_case(b.column_type.trim());
    let column = if same_column { 1.0 } else { 0.0 };
    (STRUCTURAL_TAG_SHARE * tags + STRUCTURAL_COLUMN_SHARE * column).clamp(0.0, 1.0)
}

/// Same author and creation-time proximity.
pub fn contextual(a: &Card, b: &Card) -> f64 {
    let mut score = 0.0;
    if let (Some(x), Some(y)) = (&a.created_by, &b.created_by) {
        if !x.trim().is_empty() && x == y {
            score += SAME_AUTHOR_BONUS;
        }
    }
    if let (Some(x), Some(y)) = (a.created_at, b.created_at) {
        let gap = (x - y).num_seconds().abs();
        if gap < HOUR_SECS {
            score += WITHIN_HOUR_BONUS;
        } else if gap < DAY_SECS {
            score += WITHIN_DAY_BONUS;
        }
    }
    f64::min(score, 1.0)
}

/// Word overlap of titles and of bodies, weighted toward the title.
pub fn content(a: &Card, b: &Card, stop_words: &StopWords) -> f64 {
    let words = |text: &str| stop_words.significant_words(text);
    let title = jaccard(&words(&a.title), &words(&b.title));
    let body = jaccard(
        &words(a.content.as_deref().unwrap_or_default()),
        &words(b.content.as_deref().unwrap_or_default()),
    );
    (CONTENT_TITLE_SHARE * title + CONTENT_BODY_SHARE * body).clamp(0.0, 1.0)
}

/// True when two cards carry the same text, tags, and column (or the same id).
pub fn is_identical(a: &Card, b: &Card) -> bool {
    if a.id == b.id {
        return true;
    }
    let norm = |s: &str| s.trim().to_lowercase();
    norm(&a.title) == norm(&b.title)
        && norm(a.content.as_deref().unwrap_or_default())
            == norm(b.content.as_deref().unwrap_or_default())
        && tag_set(a) == tag_set(b)
        && norm(&a.column_type) == norm(&b.column_type)
}
