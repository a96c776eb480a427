//! Session score and persisted best score.

use crate::core::constants::HIGH_SCORE_KEY;
use crate::utils::persistence::SharedStore;

/// Snapshot handed to the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub current: u32,
    pub best: u32,
    pub is_new_best: bool,
}

pub struct ScoreTracker {
    current: u32,
    best: u32,
    store: SharedStore,
}

impl ScoreTracker {
    /// Create a tracker, loading the best score from `store`. Missing,
    /// unparsable, or unreadable values count as zero.
    pub fn new(store: SharedStore) -> Self {
        let best = load_best(&store);
        Self {
            current: 0,
            best,
            store,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);

        if self.current > self.best {
            self.best = self.current;
            self.save_best();
            tracing::info!(best = self.best, "New best score");
        }
    }

    pub fn current_score(&self) -> u32 {
        self.current
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    /// Zero the session score. The best score is never reset by play.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn is_new_best(&self) -> bool {
        self.current == self.best && self.current > 0
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            current: self.current,
            best: self.best,
            is_new_best: self.is_new_best(),
        }
    }

    fn save_best(&self) {
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, &self.best.to_string()) {
            tracing::warn!(error = %e, "Failed to save best score");
        }
    }
}

fn load_best(store: &SharedStore) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "Stored best score is not a number, using 0");
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load best score, using 0");
            0
        }
    }
}
