//! High score leaderboard
//!
//! In-memory only. The front-end decides whether scores go anywhere else by
//! supplying its own [`ScoreSink`].

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Somewhere finished runs can be reported to
pub trait ScoreSink {
    fn submit(&mut self, player: &str, score: u64);
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player: String,
    pub score: u64,
}

/// High score leaderboard, sorted best first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A finished run earns a slot when it scored at all and either the board
    /// has room or it strictly beats the current last place.
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_none_or(|last| score > last.score))
    }

    /// 1-based slot a run with `score` would take, below any equal scores.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let above = self.entries.iter().take_while(|e| e.score >= score).count();
        Some(above + 1)
    }

    /// Record a run for `player`, returning the 1-based slot it landed in.
    pub fn add_score(&mut self, player: &str, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                player: player.to_string(),
                score,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

impl ScoreSink for HighScores {
    fn submit(&mut self, player: &str, score: u64) {
        match self.add_score(player, score) {
            Some(rank) => log::info!("{} placed #{} with {}", player, rank, score),
            None => log::debug!("{} scored {}, not a high score", player, score),
        }
    }
}
