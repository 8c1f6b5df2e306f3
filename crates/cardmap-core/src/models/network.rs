use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::card::Card;

/// A card as placed in the relationship graph. `id` is the card id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NetworkNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_node_size")]
    pub size: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub connection_count: usize,
}

fn default_node_size() -> f64 {
    1.0
}

impl NetworkNode {
    /// A node for a card with no layout information.
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            tags: card.tags.clone(),
            x: 0.0,
            y: 0.0,
            size: default_node_size(),
            color: None,
            metadata: BTreeMap::new(),
            connection_count: 0,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// A stand-in card for nodes the caller supplied without a matching card.
    pub fn to_card(&self) -> Card {
        Card::new(self.id.clone(), self.title.clone()).with_tags(self.tags.clone())
    }
}

/// A relationship between two nodes, built by the external relations layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    /// Relationship strength in [0, 1]; out-of-range values are clamped on use.
    pub strength: f64,
    #[serde(default)]
    pub edge_type: String,
}

impl NetworkEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, strength: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            strength,
            edge_type: String::new(),
        }
    }
}
