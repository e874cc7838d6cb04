// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ante and blind progression.
use serde::{Deserialize, Serialize};

/// Base target score for each ante starting from ante 1.
pub const ANTE_BASE_SCORES: [u64; 9] = [100, 300, 800, 2000, 5000, 11000, 20000, 35000, 50000];

/// Returns the base target score for an ante, `None` outside the ante table.
pub fn base_score_for_ante(ante: u32) -> Option<u64> {
    let idx = ante.checked_sub(1)?;
    ANTE_BASE_SCORES.get(idx as usize).copied()
}

/// Returns the target score for a blind in an ante.
///
/// The first blind target is the ante base score, the second is 1.5 times the
/// base and the third twice the base.
pub fn target_score(ante: u32, blind: u32) -> Option<u64> {
    let base = base_score_for_ante(ante)?;
    match blind {
        1 => Some(base),
        2 => Some(base * 3 / 2),
        3 => Some(base * 2),
        _ => None,
    }
}

/// The run phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The player is playing a blind.
    Playing,
    /// The player ran out of hands before reaching a blind target.
    Lost,
    /// The player has won the last blind of the last ante.
    Won,
}

/// The ante, blind and scores of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    ante: u32,
    blind: u32,
    target: u64,
    score: u64,
    phase: Phase,
}

impl Round {
    /// Number of blinds in an ante.
    pub const BLINDS_PER_ANTE: u32 = 3;

    /// Creates a round before the first blind, call [Round::advance] to start
    /// ante 1 blind 1.
    pub fn new() -> Self {
        Self {
            ante: 0,
            blind: 0,
            target: 0,
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// Moves to the next blind and resets the blind score.
    ///
    /// After the third blind moves to the first blind of the next ante. Returns
    /// the new target, or `None` if the ante table has no more antes, in this
    /// case the run is won and the ante and blind are left unchanged.
    pub fn advance(&mut self) -> Option<u64> {
        let (ante, blind) = if self.ante == 0 || self.blind >= Self::BLINDS_PER_ANTE {
            (self.ante + 1, 1)
        } else {
            (self.ante, self.blind + 1)
        };

        let Some(target) = target_score(ante, blind) else {
            self.phase = Phase::Won;
            return None;
        };

        self.ante = ante;
        self.blind = blind;
        self.target = target;
        self.score = 0;

        Some(target)
    }

    /// Adds a hand score to the blind score.
    pub fn add_score(&mut self, score: u64) {
        self.score = self.score.saturating_add(score);
    }

    /// Checks if the blind target has been reached.
    pub fn is_cleared(&self) -> bool {
        self.ante > 0 && self.score >= self.target
    }

    /// Ends the run with a loss.
    pub fn lose(&mut self) {
        self.phase = Phase::Lost;
    }

    /// The current ante, 0 before the first blind.
    pub fn ante(&self) -> u32 {
        self.ante
    }

    /// The current blind in `1..=3`, 0 before the first blind.
    pub fn blind(&self) -> u32 {
        self.blind
    }

    /// The current blind target score.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The score accumulated in this blind.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The run phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Checks if the run is still being played.
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
