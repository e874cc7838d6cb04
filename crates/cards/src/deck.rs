// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck with live and discard sequences.
use log::debug;
use rand::prelude::*;
use std::fmt;

use crate::{Card, CardId, Rank, Suit};

/// A cards Deck.
///
/// The deck owns the 52 cards and keeps two sequences of card ids, the live
/// cards that can be drawn and the discard pile with the cards drawn since the
/// last shuffle. Their union is always the full 52 cards set.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    live: Vec<CardId>,
    discard_pile: Vec<CardId>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new unshuffled deck.
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Self::SIZE),
            live: Vec::with_capacity(Self::SIZE),
            discard_pile: Vec::with_capacity(Self::SIZE),
        };
        deck.reset();
        deck
    }

    /// Rebuilds the full deck ordered by suit then rank and clears the discard
    /// pile.
    pub fn reset(&mut self) {
        self.cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect();
        self.live = self.cards.iter().map(Card::id).collect();
        self.discard_pile.clear();

        debug!("Deck reset with {} cards", self.live.len());
    }

    /// Moves the discard pile back into the deck and shuffles all cards.
    ///
    /// Shuffling is a Fisher-Yates permutation that walks the cards from the
    /// end, the permutation is deterministic for a seeded `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let merged = self.discard_pile.len();
        self.live.append(&mut self.discard_pile);
        self.live.shuffle(rng);

        debug!("Deck shuffled, {merged} cards returned from discard pile");
    }

    /// Draws the top card, the card goes to the discard pile.
    ///
    /// Returns `None` if there are no cards left to draw.
    pub fn draw(&mut self) -> Option<CardId> {
        let id = self.live.pop()?;
        self.discard_pile.push(id);
        Some(id)
    }

    /// Number of cards left to draw.
    pub fn size(&self) -> usize {
        self.live.len()
    }

    /// Checks if there are no cards left to draw.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of cards in the discard pile.
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    /// The cards left to draw, the last one is the next to be drawn.
    pub fn live(&self) -> &[CardId] {
        &self.live
    }

    /// The discard pile.
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// Gets a card by id.
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Gets a card by id for updating its modifiers.
    pub fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// Iterates the cards left to draw.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.live.iter().map(|id| self.card(*id))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deck ({} cards, {} discarded):", self.size(), self.discarded())?;
        for (n, card) in self.iter().enumerate() {
            writeln!(f, "{:>3}. {}", n + 1, card.name())?;
        }
        Ok(())
    }
}
