use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A short text note on a board. Owned by the persistence layer; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Board column the card lives in (e.g. "ideas", "issues").
    #[serde(default)]
    pub column_type: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: None,
            tags: Vec::new(),
            column_type: String::new(),
            created_by: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_column(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = column_type.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.created_by = Some(author.into());
        self.created_at = Some(at);
        self
    }

    /// Title and body joined, for text-based signals.
    pub fn full_text(&self) -> String {
        match &self.content {
            Some(body) if !body.trim().is_empty() => format!("{}. {}", self.title, body),
            _ => self.title.clone(),
        }
    }

    /// Tags lowercased, trimmed, empty ones dropped.
    pub fn normalized_tags(&self) -> Vec<String> {
        normalize_tags(&self.tags)
    }
}

/// Lowercase and trim tags, dropping empties and duplicates while keeping first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let t = tag.trim().to_lowercase();
        if !t.is_empty() && !out.contains(&t) {
            out.push(t);
        }
    }
    out
}
