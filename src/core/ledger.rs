//! Score ledger - append-only record of finished games
//!
//! The ledger is an explicit value owned by the driver and passed by
//! reference; it is never global state. Entries are kept in insertion order;
//! the leaderboard view is a stable descending sort, so equal scores keep
//! their insertion order and ranks are well defined.

/// One finished game: player name and final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// A ledger entry together with its rank in the descending leaderboard
/// (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

/// Append-only list of score entries.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    entries: Vec<ScoreEntry>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Duplicate names are retained; every finished game
    /// records exactly once.
    pub fn record(&mut self, name: impl Into<String>, score: u32) {
        self.entries.push(ScoreEntry {
            name: name.into(),
            score,
        });
    }

    /// Leaderboard view: stable sort by score descending, ties in insertion
    /// order.
    pub fn sorted_descending(&self) -> Vec<ScoreEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    /// Case-insensitive exact-name lookup, preserving each match's rank in
    /// the descending leaderboard.
    pub fn find_by_name(&self, query: &str) -> Vec<RankedEntry> {
        let query = query.to_lowercase();
        self.sorted_descending()
            .into_iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase() == query)
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                name: entry.name,
                score: entry.score,
            })
            .collect()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
