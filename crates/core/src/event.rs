// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Notifications emitted by a game session.
use serde::{Deserialize, Serialize};
use std::fmt;

use webaltro_eval::HandType;

/// A game event for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new blind has started with a fresh hand.
    BlindStarted {
        /// The ante.
        ante: u32,
        /// The blind in the ante.
        blind: u32,
        /// The score to reach.
        target: u64,
    },
    /// A hand has been played and scored.
    HandScored {
        /// The played hand type.
        hand_type: HandType,
        /// The hand base chips.
        chips: u32,
        /// The hand multiplier.
        mult: u32,
        /// The hand score.
        score: u64,
        /// The blind score after this hand.
        total: u64,
    },
    /// Selected cards have been discarded.
    CardsDiscarded {
        /// Number of discarded cards.
        count: usize,
        /// Discards left in this blind.
        discards_remaining: u32,
    },
    /// The blind target has been reached.
    BlindWon {
        /// The ante.
        ante: u32,
        /// The blind in the ante.
        blind: u32,
        /// The final blind score.
        score: u64,
        /// The blind target.
        target: u64,
    },
    /// The hands ran out before reaching the target.
    GameOver {
        /// The ante.
        ante: u32,
        /// The blind in the ante.
        blind: u32,
        /// The final blind score.
        score: u64,
        /// The blind target.
        target: u64,
    },
    /// The last blind of the last ante has been won.
    RunWon {
        /// The last ante.
        ante: u32,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::BlindStarted {
                ante,
                blind,
                target,
            } => write!(f, "Ante {ante} blind {blind} started, target {target}"),
            GameEvent::HandScored {
                hand_type,
                chips,
                mult,
                score,
                total,
            } => write!(
                f,
                "{hand_type} ({chips} x {mult}) scored {score}, total {total}"
            ),
            GameEvent::CardsDiscarded {
                count,
                discards_remaining,
            } => write!(
                f,
                "Discarded {count} cards, {discards_remaining} discards left"
            ),
            GameEvent::BlindWon {
                ante,
                blind,
                score,
                target,
            } => write!(
                f,
                "Blind won! Ante {ante} blind {blind} scored {score} of {target}"
            ),
            GameEvent::GameOver {
                ante,
                blind,
                score,
                target,
            } => write!(
                f,
                "Game over at ante {ante} blind {blind}, scored {score} of {target}"
            ),
            GameEvent::RunWon { ante } => write!(f, "Run won after ante {ante}!"),
        }
    }
}
