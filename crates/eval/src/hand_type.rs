// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their base chips and multiplier.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// No other category matches.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
    /// A Ten to Ace straight flush.
    RoyalFlush,
}

impl HandType {
    /// Returns all hand types from the weakest.
    pub fn hand_types() -> impl DoubleEndedIterator<Item = HandType> {
        use HandType::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The base (chips, multiplier) pair for this hand type.
    pub fn base_values(self) -> (u32, u32) {
        match self {
            HandType::HighCard => (5, 1),
            HandType::Pair => (10, 2),
            HandType::TwoPair => (20, 2),
            HandType::ThreeOfAKind => (30, 3),
            HandType::Straight => (30, 4),
            HandType::Flush => (35, 4),
            HandType::FullHouse => (40, 4),
            HandType::FourOfAKind => (60, 7),
            HandType::StraightFlush => (100, 8),
            HandType::RoyalFlush => (100, 8),
        }
    }

    /// The base chips.
    pub fn chips(self) -> u32 {
        self.base_values().0
    }

    /// The multiplier.
    pub fn mult(self) -> u32 {
        self.base_values().1
    }

    /// The hand type label.
    pub fn name(self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
