// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card unique identifier.
///
/// The id is derived from the card suit and rank as `suit * 13 + rank` so that
/// each card in a 52 cards deck has a distinct id in `0..52`, the id is also the
/// card slot in the [Deck](crate::Deck) cards arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Creates the id for a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self(suit as u8 * Rank::COUNT as u8 + rank as u8)
    }

    /// The arena index for this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playing card.
///
/// A card is created once when a deck is built and it is never cloned, other
/// containers refer to it by its [CardId]. Only the modifier tags can change
/// after creation.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,
    enhancement: Option<Enhancement>,
    edition: Option<Edition>,
    seal: Option<Seal>,
}

impl Card {
    /// Creates a card with no modifiers.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            rank,
            suit,
            enhancement: None,
            edition: None,
            seal: None,
        }
    }

    /// This card unique id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The card scoring value, see [Rank::value].
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// The card long name, e.g. "Queen of Spades".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// The card enhancement.
    pub fn enhancement(&self) -> Option<Enhancement> {
        self.enhancement
    }

    /// Sets or clears the card enhancement.
    pub fn set_enhancement(&mut self, enhancement: Option<Enhancement>) {
        self.enhancement = enhancement;
    }

    /// The card edition.
    pub fn edition(&self) -> Option<Edition> {
        self.edition
    }

    /// Sets or clears the card edition.
    pub fn set_edition(&mut self, edition: Option<Edition>) {
        self.edition = edition;
    }

    /// The card seal.
    pub fn seal(&self) -> Option<Seal> {
        self.seal
    }

    /// Sets or clears the card seal.
    pub fn set_seal(&mut self, seal: Option<Seal>) {
        self.seal = seal;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The scoring value: face value for 2 to 10, 10 for face cards and 11 for
    /// the Ace.
    pub fn value(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => r as u32 + 2,
        }
    }

    /// The rank name.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// Card enhancement tag, not used by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Enhancement {
    Bonus,
    Mult,
    Wild,
    Glass,
    Steel,
    Stone,
    Gold,
    Lucky,
}

/// Card edition tag, not used by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Edition {
    Foil,
    Holographic,
    Polychrome,
    Negative,
}

/// Card seal tag, not used by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Seal {
    Gold,
    Red,
    Blue,
    Purple,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_values() {
        let values = Rank::ranks().map(Rank::value).collect::<Vec<_>>();
        assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11]);

        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).value(), 7);
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
    }

    #[test]
    fn card_ids() {
        let mut ids = HashSet::default();
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert!(card.id().index() < 52);
                ids.insert(card.id());
            }
        }

        assert_eq!(ids.len(), 52);
        assert_eq!(Card::new(Rank::Deuce, Suit::Hearts).id().index(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).id().index(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.name(), "King of Diamonds");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(c.name(), "10 of Hearts");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");
    }

    #[test]
    fn card_modifiers() {
        let mut c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.enhancement(), None);
        assert_eq!(c.edition(), None);
        assert_eq!(c.seal(), None);

        c.set_enhancement(Some(Enhancement::Glass));
        c.set_edition(Some(Edition::Foil));
        c.set_seal(Some(Seal::Red));

        assert_eq!(c.enhancement(), Some(Enhancement::Glass));
        assert_eq!(c.edition(), Some(Edition::Foil));
        assert_eq!(c.seal(), Some(Seal::Red));

        // Tags don't change identity or value.
        assert_eq!(c.id(), CardId::new(Rank::Ace, Suit::Hearts));
        assert_eq!(c.value(), 11);
    }
}
