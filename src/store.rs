//! Ledger persistence - JSON file behind the three ledger operations
//!
//! The serde types here are deliberately separate from `core::ledger`, which
//! stays serialization-free; this module owns the on-disk schema.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{ScoreEntry, ScoreLedger};

/// On-disk representation of one ledger entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    name: String,
    score: u32,
}

/// File-backed store for the score ledger.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `scores.json` in the working directory.
    pub fn default_path() -> Self {
        Self::new("scores.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger. A missing or unreadable file yields an empty ledger
    /// so a first run (or a corrupt file) never blocks starting the game.
    pub fn load(&self) -> ScoreLedger {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return ScoreLedger::new();
        };
        let Ok(stored) = serde_json::from_str::<Vec<StoredEntry>>(&raw) else {
            return ScoreLedger::new();
        };

        let mut ledger = ScoreLedger::new();
        for entry in stored {
            ledger.record(entry.name, entry.score);
        }
        ledger
    }

    /// Rewrite the file from the ledger's insertion-ordered entries.
    pub fn save(&self, ledger: &ScoreLedger) -> Result<()> {
        let stored: Vec<StoredEntry> = ledger
            .entries()
            .iter()
            .map(|ScoreEntry { name, score }| StoredEntry {
                name: name.clone(),
                score: *score,
            })
            .collect();

        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing score ledger to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> LedgerStore {
        let mut path = std::env::temp_dir();
        path.push(format!("tetris-legacy-store-{}-{}.json", tag, std::process::id()));
        let _ = fs::remove_file(&path);
        LedgerStore::new(path)
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = temp_store("missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let store = temp_store("roundtrip");
        let mut ledger = ScoreLedger::new();
        ledger.record("Ann", 100);
        ledger.record("Bo", 300);
        store.save(&ledger).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.entries(), ledger.entries());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());
        let _ = fs::remove_file(store.path());
    }
}
