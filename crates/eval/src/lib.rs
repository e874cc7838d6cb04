// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Webaltro hand classifier.
//!
//! Classifies up to five selected cards into one of ten [HandType]s, each
//! with a fixed base chips and multiplier pair used to score a played hand:
//!
//! ```
//! # use webaltro_eval::*;
//! let cards = [
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//!
//! let hand_type = classify(&cards).unwrap();
//! assert_eq!(hand_type, HandType::Pair);
//! assert_eq!(hand_type.base_values(), (10, 2));
//!
//! // 2 * (10 + 10 + 10)
//! assert_eq!(score(hand_type, &cards), 60);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{classify, score};

mod hand_type;
pub use hand_type::HandType;

// Reexport cards types.
pub use webaltro_cards::{Card, CardId, Deck, Rank, Suit};
