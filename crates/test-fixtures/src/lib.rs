//! Board fixtures shared by integration tests and benchmarks.
//!
//! Each board is one JSON file under `boards/`, deserialized into [`Board`].

use std::path::{Path, PathBuf};

use cardmap_core::models::{Card, NetworkEdge, NetworkNode};
use serde::{Deserialize, Serialize};

/// A board as stored in a fixture file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    pub name: String,
    pub description: String,
    pub cards: Vec<Card>,
    /// Empty when the fixture leaves node derivation to the engine.
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// `crates/test-fixtures/boards`, resolved from this crate's own manifest.
pub fn boards_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("boards")
}

/// Load `boards/<name>.json`.
///
/// # Panics
/// Panics if the board is missing or is not a valid board file.
pub fn load_board(name: &str) -> Board {
    let path = boards_dir().join(format!("{name}.json"));
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("board {name} unreadable at {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("board {name} is malformed: {e}"))
}

/// Names of every board fixture, sorted.
pub fn board_names() -> Vec<String> {
    let dir = boards_dir();
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("boards directory {} unreadable: {e}", dir.display()))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path.file_stem()?.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}
