// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The player hand.
use log::debug;

use webaltro_cards::{CardId, Deck};
use webaltro_eval::{HandType, classify, score};

use crate::GameError;

/// A scored hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedHand {
    /// The hand type.
    pub hand_type: HandType,
    /// The hand type base chips.
    pub chips: u32,
    /// The hand type multiplier.
    pub mult: u32,
    /// Sum of the played cards values.
    pub card_values: u32,
    /// The hand score, `mult * (chips + card_values)`.
    pub score: u64,
    /// The played cards.
    pub cards: Vec<CardId>,
}

/// The cards held by the player.
///
/// Cards are referenced by id and read from the [Deck] that owns them, the
/// selection is kept by id too so that sorting the hand doesn't change which
/// cards are selected.
#[derive(Debug)]
pub struct Hand {
    cards: Vec<CardId>,
    selected: Vec<CardId>,
    hand_type: Option<HandType>,
    hand_size: usize,
    max_selected: usize,
    hands: u32,
    discards: u32,
    hands_remaining: u32,
    discards_remaining: u32,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new(hand_size: usize, max_selected: usize, hands: u32, discards: u32) -> Self {
        Self {
            cards: Vec::with_capacity(hand_size),
            selected: Vec::with_capacity(max_selected),
            hand_type: None,
            hand_size,
            max_selected,
            hands,
            discards,
            hands_remaining: hands,
            discards_remaining: discards,
        }
    }

    /// Draws one card from the deck into the hand.
    pub fn draw(&mut self, deck: &mut Deck) -> Option<CardId> {
        let id = deck.draw()?;
        self.cards.push(id);
        Some(id)
    }

    /// Draws cards until the hand is full or the deck is empty, returns the
    /// drawn cards.
    pub fn draw_full_hand(&mut self, deck: &mut Deck) -> Vec<CardId> {
        let mut drawn = Vec::with_capacity(self.hand_size.saturating_sub(self.cards.len()));
        while self.cards.len() < self.hand_size {
            match self.draw(deck) {
                Some(id) => drawn.push(id),
                None => {
                    debug!("Deck exhausted with {} cards in hand", self.cards.len());
                    break;
                }
            }
        }

        drawn
    }

    /// Toggles the selection of the card at `index`.
    ///
    /// Selecting more than the maximum number of cards is ignored. The hand
    /// type is evaluated again after every call.
    pub fn select_card(&mut self, index: usize, deck: &Deck) -> Result<(), GameError> {
        let id = self.card(index).ok_or(GameError::CardIndex(index))?;

        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else if self.selected.len() < self.max_selected {
            self.selected.push(id);
        }

        self.evaluate(deck);
        Ok(())
    }

    /// Plays the selected cards.
    ///
    /// Returns `Ok(None)` if no card is selected. Played cards leave the hand
    /// and the hand is refilled from the deck.
    pub fn play_cards(&mut self, deck: &mut Deck) -> Result<Option<PlayedHand>, GameError> {
        let Some(hand_type) = self.hand_type.filter(|_| !self.selected.is_empty()) else {
            return Ok(None);
        };

        if self.hands_remaining == 0 {
            return Err(GameError::NoHandsLeft);
        }

        self.hands_remaining -= 1;

        let played = std::mem::take(&mut self.selected);
        let cards = played.iter().map(|id| deck.card(*id));
        let card_values = cards.clone().map(|c| c.value()).sum::<u32>();
        let hand_score = score(hand_type, cards);

        self.remove_cards(&played);
        self.hand_type = None;
        self.draw_full_hand(deck);

        let (chips, mult) = hand_type.base_values();
        Ok(Some(PlayedHand {
            hand_type,
            chips,
            mult,
            card_values,
            score: hand_score,
            cards: played,
        }))
    }

    /// Discards the selected cards without scoring them.
    ///
    /// Returns the number of discarded cards or `Ok(None)` if no card is
    /// selected.
    pub fn discard_cards(&mut self, deck: &mut Deck) -> Result<Option<usize>, GameError> {
        if self.selected.is_empty() {
            return Ok(None);
        }

        if self.discards_remaining == 0 {
            return Err(GameError::NoDiscardsLeft);
        }

        self.discards_remaining -= 1;

        let discarded = std::mem::take(&mut self.selected);
        self.remove_cards(&discarded);
        self.hand_type = None;
        self.draw_full_hand(deck);

        Ok(Some(discarded.len()))
    }

    /// Empties the hand, restores hands and discards and draws a full hand.
    ///
    /// The deck should have been shuffled before calling this.
    pub fn reset_for_next_blind(&mut self, deck: &mut Deck) {
        self.cards.clear();
        self.selected.clear();
        self.hand_type = None;
        self.hands_remaining = self.hands;
        self.discards_remaining = self.discards;
        self.draw_full_hand(deck);
    }

    /// Sorts the cards by rank.
    pub fn sort_by_rank(&mut self, deck: &Deck) {
        self.cards.sort_by_key(|id| deck.card(*id).rank());
    }

    /// Sorts the cards by suit, cards with the same suit are sorted by rank.
    pub fn sort_by_suit(&mut self, deck: &Deck) {
        self.sort_by_rank(deck);
        self.cards.sort_by_key(|id| deck.card(*id).suit());
    }

    /// The held cards ids.
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// The card id at `index`.
    pub fn card(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Number of held cards.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// The selected cards ids in selection order.
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    /// The hand positions of the selected cards in selection order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .filter_map(|s| self.cards.iter().position(|c| c == s))
            .collect()
    }

    /// Checks if the card at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.card(index).is_some_and(|id| self.selected.contains(&id))
    }

    /// The hand type of the current selection.
    pub fn hand_type(&self) -> Option<HandType> {
        self.hand_type
    }

    /// Hands left in this blind.
    pub fn hands_remaining(&self) -> u32 {
        self.hands_remaining
    }

    /// Discards left in this blind.
    pub fn discards_remaining(&self) -> u32 {
        self.discards_remaining
    }

    /// The number of cards in a full hand.
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    fn evaluate(&mut self, deck: &Deck) {
        self.hand_type = classify(self.selected.iter().map(|id| deck.card(*id)));
    }

    fn remove_cards(&mut self, ids: &[CardId]) {
        self.cards.retain(|c| !ids.contains(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use webaltro_cards::{Rank, Suit};

    // An unshuffled deck deals from the Ace of Clubs down.
    fn new_hand(hand_size: usize) -> (Hand, Deck) {
        let mut deck = Deck::new();
        let mut hand = Hand::new(hand_size, 5, 4, 3);
        hand.draw_full_hand(&mut deck);
        (hand, deck)
    }

    fn select(hand: &mut Hand, deck: &Deck, indices: &[usize]) {
        for &index in indices {
            hand.select_card(index, deck).unwrap();
        }
    }

    #[test]
    fn draw_full_hand() {
        let (hand, deck) = new_hand(8);
        assert_eq!(hand.size(), 8);
        assert_eq!(deck.size(), Deck::SIZE - 8);
        assert_eq!(deck.discarded(), 8);
        assert_eq!(hand.card(0), Some(CardId::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(hand.card(7), Some(CardId::new(Rank::Seven, Suit::Clubs)));
        assert_eq!(hand.card(8), None);
    }

    #[test]
    fn draw_stops_on_empty_deck() {
        let mut deck = Deck::new();
        while deck.size() > 3 {
            deck.draw();
        }

        let mut hand = Hand::new(8, 5, 4, 3);
        let drawn = hand.draw_full_hand(&mut deck);
        assert_eq!(drawn.len(), 3);
        assert_eq!(hand.size(), 3);
        assert!(deck.is_empty());
    }

    #[test]
    fn select_toggles() {
        let (mut hand, deck) = new_hand(8);
        assert_eq!(hand.hand_type(), None);

        hand.select_card(2, &deck).unwrap();
        assert_eq!(hand.selected_indices(), [2]);
        assert!(hand.is_selected(2));
        assert_eq!(hand.hand_type(), Some(HandType::HighCard));

        hand.select_card(2, &deck).unwrap();
        assert!(hand.selected().is_empty());
        assert!(!hand.is_selected(2));
        assert_eq!(hand.hand_type(), None);
    }

    #[test]
    fn select_is_idempotent_in_pairs() {
        let (mut hand, deck) = new_hand(8);
        select(&mut hand, &deck, &[0, 1, 2]);
        let before = (hand.selected().to_vec(), hand.hand_type());

        select(&mut hand, &deck, &[5, 5]);
        assert_eq!((hand.selected().to_vec(), hand.hand_type()), before);
    }

    #[test]
    fn select_cap() {
        let (mut hand, deck) = new_hand(8);
        select(&mut hand, &deck, &[0, 1, 2, 3, 4]);
        assert_eq!(hand.hand_type(), Some(HandType::RoyalFlush));

        // A sixth card is ignored.
        hand.select_card(5, &deck).unwrap();
        assert_eq!(hand.selected_indices(), [0, 1, 2, 3, 4]);
        assert!(!hand.is_selected(5));
        assert_eq!(hand.hand_type(), Some(HandType::RoyalFlush));

        // Unselect one and select the sixth.
        select(&mut hand, &deck, &[0, 5]);
        assert_eq!(hand.selected_indices(), [1, 2, 3, 4, 5]);
        assert_eq!(hand.hand_type(), Some(HandType::StraightFlush));
    }

    #[test]
    fn select_invalid_index() {
        let (mut hand, deck) = new_hand(8);
        assert_eq!(hand.select_card(8, &deck), Err(GameError::CardIndex(8)));
        assert!(hand.selected().is_empty());
    }

    #[test]
    fn play_royal_flush() {
        let (mut hand, mut deck) = new_hand(8);
        select(&mut hand, &deck, &[0, 1, 2, 3, 4]);
        let played_ids = hand.selected().to_vec();

        let played = hand.play_cards(&mut deck).unwrap().unwrap();
        assert_eq!(played.hand_type, HandType::RoyalFlush);
        assert_eq!((played.chips, played.mult), (100, 8));
        assert_eq!(played.card_values, 51);
        assert_eq!(played.score, 8 * (100 + 51));
        assert_eq!(played.cards, played_ids);

        assert_eq!(hand.hands_remaining(), 3);
        assert_eq!(hand.size(), 8);
        assert!(hand.selected().is_empty());
        assert_eq!(hand.hand_type(), None);
        assert!(played_ids.iter().all(|id| !hand.cards().contains(id)));
        assert_eq!(deck.size() + deck.discarded(), Deck::SIZE);
    }

    #[test]
    fn play_pair_of_kings() {
        // AC..2C, AD, KD
        let (mut hand, mut deck) = new_hand(15);
        assert_eq!(hand.card(1), Some(CardId::new(Rank::King, Suit::Clubs)));
        assert_eq!(hand.card(14), Some(CardId::new(Rank::King, Suit::Diamonds)));

        select(&mut hand, &deck, &[1, 14]);
        assert_eq!(hand.hand_type(), Some(HandType::Pair));

        let played = hand.play_cards(&mut deck).unwrap().unwrap();
        assert_eq!(played.score, 60);
    }

    #[test]
    fn play_removes_by_identity() {
        let (mut hand, mut deck) = new_hand(8);

        // Select out of order, positions shift as cards are removed.
        select(&mut hand, &deck, &[6, 1, 3]);
        hand.play_cards(&mut deck).unwrap();

        let kept = [
            CardId::new(Rank::Ace, Suit::Clubs),
            CardId::new(Rank::Queen, Suit::Clubs),
            CardId::new(Rank::Ten, Suit::Clubs),
            CardId::new(Rank::Nine, Suit::Clubs),
            CardId::new(Rank::Seven, Suit::Clubs),
        ];
        assert_eq!(&hand.cards()[..5], &kept);
        assert_eq!(hand.card(5), Some(CardId::new(Rank::Six, Suit::Clubs)));

        let unique = hand.cards().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn play_nothing_selected() {
        let (mut hand, mut deck) = new_hand(8);
        assert_eq!(hand.play_cards(&mut deck), Ok(None));
        assert_eq!(hand.hands_remaining(), 4);
        assert_eq!(deck.size(), Deck::SIZE - 8);
    }

    #[test]
    fn no_hands_left() {
        let (mut hand, mut deck) = new_hand(8);
        for _ in 0..4 {
            select(&mut hand, &deck, &[0]);
            assert!(hand.play_cards(&mut deck).unwrap().is_some());
        }
        assert_eq!(hand.hands_remaining(), 0);

        select(&mut hand, &deck, &[0]);
        assert_eq!(hand.play_cards(&mut deck), Err(GameError::NoHandsLeft));
        assert_eq!(hand.selected().len(), 1);
    }

    #[test]
    fn discard_cards() {
        let (mut hand, mut deck) = new_hand(8);
        select(&mut hand, &deck, &[0, 1]);
        let discarded = hand.selected().to_vec();

        assert_eq!(hand.discard_cards(&mut deck), Ok(Some(2)));
        assert_eq!(hand.discards_remaining(), 2);
        assert_eq!(hand.hands_remaining(), 4);
        assert_eq!(hand.size(), 8);
        assert!(hand.selected().is_empty());
        assert_eq!(hand.hand_type(), None);
        assert!(discarded.iter().all(|id| !hand.cards().contains(id)));
        assert_eq!(deck.size(), Deck::SIZE - 10);

        // Nothing selected.
        assert_eq!(hand.discard_cards(&mut deck), Ok(None));
        assert_eq!(hand.discards_remaining(), 2);
    }

    #[test]
    fn no_discards_left() {
        let (mut hand, mut deck) = new_hand(8);
        for _ in 0..3 {
            select(&mut hand, &deck, &[0]);
            hand.discard_cards(&mut deck).unwrap();
        }

        select(&mut hand, &deck, &[0]);
        assert_eq!(hand.discard_cards(&mut deck), Err(GameError::NoDiscardsLeft));
    }

    #[test]
    fn reset_for_next_blind() {
        let (mut hand, mut deck) = new_hand(8);
        select(&mut hand, &deck, &[0, 1]);
        hand.play_cards(&mut deck).unwrap();
        select(&mut hand, &deck, &[0]);
        hand.discard_cards(&mut deck).unwrap();
        select(&mut hand, &deck, &[3]);

        deck.shuffle(&mut rand::rng());
        hand.reset_for_next_blind(&mut deck);

        assert_eq!(hand.size(), 8);
        assert!(hand.selected().is_empty());
        assert_eq!(hand.hand_type(), None);
        assert_eq!(hand.hands_remaining(), 4);
        assert_eq!(hand.discards_remaining(), 3);
        assert_eq!(deck.size(), Deck::SIZE - 8);
    }

    #[test]
    fn sort_by_rank_and_suit() {
        // AC..2C, AD, KD, QD
        let (mut hand, deck) = new_hand(16);

        hand.sort_by_rank(&deck);
        let ranks = hand
            .cards()
            .iter()
            .map(|id| deck.card(*id).rank())
            .collect::<Vec<_>>();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));

        // Equal ranks keep their previous order.
        assert_eq!(hand.card(14), Some(CardId::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(hand.card(15), Some(CardId::new(Rank::Ace, Suit::Diamonds)));

        hand.sort_by_suit(&deck);
        let cards = hand
            .cards()
            .iter()
            .map(|id| (deck.card(*id).suit(), deck.card(*id).rank()))
            .collect::<Vec<_>>();
        assert!(cards.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cards[0], (Suit::Diamonds, Rank::Queen));
        assert_eq!(cards[3], (Suit::Clubs, Rank::Deuce));
    }

    #[test]
    fn sort_keeps_selection() {
        let (mut hand, deck) = new_hand(8);
        let ace = hand.card(0).unwrap();
        select(&mut hand, &deck, &[0]);

        hand.sort_by_rank(&deck);
        assert_eq!(hand.selected(), &[ace]);
        assert_eq!(hand.selected_indices(), [7]);
        assert!(hand.is_selected(7));
    }
}
