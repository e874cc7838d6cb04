// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Webaltro cards types.
//!
//! This crate defines the card types:
//!
//! ```
//! # use webaltro_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 11);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type that owns the 52 cards, with a live sequence to draw from
//! and a discard pile that is merged back on every shuffle:
//!
//! ```
//! # use webaltro_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut deck = Deck::new();
//! deck.shuffle(&mut StdRng::seed_from_u64(1));
//!
//! let id = deck.draw().unwrap();
//! println!("Drawn {}", deck.card(id).name());
//!
//! assert_eq!(deck.size(), 51);
//! assert_eq!(deck.discarded(), 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardId, Edition, Enhancement, Rank, Seal, Suit};

mod deck;
pub use deck::Deck;
