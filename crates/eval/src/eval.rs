// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and scoring.
use webaltro_cards::{Card, Rank};

use crate::HandType;

/// Number of cards needed for a flush or a straight.
const FIVE_CARDS: usize = 5;

/// Classifies a selection of cards.
///
/// Returns `None` for an empty selection. Flushes and straights are only
/// possible with exactly five cards, straights need five distinct consecutive
/// ranks and the Ace is always high, so A2345 is not a straight. A straight
/// flush from Ten to Ace is a [HandType::RoyalFlush].
pub fn classify<'a, I>(cards: I) -> Option<HandType>
where
    I: IntoIterator<Item = &'a Card>,
{
    let cards = cards.into_iter().collect::<Vec<_>>();
    match cards.len() {
        0 => return None,
        1 => return Some(HandType::HighCard),
        _ => {}
    }

    let mut rank_counts = [0u8; Rank::COUNT];
    for card in &cards {
        rank_counts[card.rank() as usize] += 1;
    }

    let mut occurrences = rank_counts
        .iter()
        .copied()
        .filter(|&n| n > 0)
        .collect::<Vec<_>>();
    occurrences.sort_unstable_by(|a, b| b.cmp(a));

    let (flush, straight) = if cards.len() == FIVE_CARDS {
        (is_flush(&cards), straight_low(&rank_counts))
    } else {
        (false, None)
    };

    let first = occurrences[0];
    let second = occurrences.get(1).copied().unwrap_or(0);

    let hand_type = match straight {
        Some(low) if flush => {
            if low == Rank::Ten as usize {
                HandType::RoyalFlush
            } else {
                HandType::StraightFlush
            }
        }
        _ if first == 4 => HandType::FourOfAKind,
        _ if first == 3 && second == 2 => HandType::FullHouse,
        _ if flush => HandType::Flush,
        Some(_) => HandType::Straight,
        None if first == 3 => HandType::ThreeOfAKind,
        None if first == 2 && second == 2 => HandType::TwoPair,
        None if first == 2 => HandType::Pair,
        None => HandType::HighCard,
    };

    Some(hand_type)
}

/// Computes a hand score as `mult * (chips + cards values)`.
pub fn score<'a, I>(hand_type: HandType, cards: I) -> u64
where
    I: IntoIterator<Item = &'a Card>,
{
    let (chips, mult) = hand_type.base_values();
    let values = cards.into_iter().map(|c| c.value() as u64).sum::<u64>();
    mult as u64 * (chips as u64 + values)
}

fn is_flush(cards: &[&Card]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

/// Returns the lowest rank index if the counts are five distinct consecutive
/// ranks.
fn straight_low(rank_counts: &[u8; Rank::COUNT]) -> Option<usize> {
    let mut ranks = rank_counts
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .map(|(rank, _)| rank);

    let low = ranks.next()?;
    let mut distinct = 1;
    let mut last = low;
    for rank in ranks {
        if rank != last + 1 {
            return None;
        }
        last = rank;
        distinct += 1;
    }

    (distinct == FIVE_CARDS).then_some(low)
}
