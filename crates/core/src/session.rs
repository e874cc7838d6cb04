// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game session that drives the blinds progression.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use webaltro_cards::{Card, Deck};
use webaltro_eval::HandType;

use crate::{
    Config, GameError, GameEvent,
    hand::{Hand, PlayedHand},
    round::{Phase, Round},
};

/// A single player game session.
///
/// The session owns the deck, the hand and the round state, every operation
/// runs to completion and queues [GameEvent]s that the presentation layer
/// reads with [GameSession::take_events].
#[derive(Debug)]
pub struct GameSession {
    config: Config,
    deck: Deck,
    hand: Hand,
    round: Round,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Creates a session and starts the first blind.
    pub fn new(config: Config) -> Result<Self, GameError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let hand = Hand::new(
            config.hand_size,
            config.max_selected,
            config.hands_per_blind,
            config.discards_per_blind,
        );

        let mut session = Self {
            config,
            deck: Deck::new(),
            hand,
            round: Round::new(),
            rng,
            events: Vec::new(),
        };

        session.start_run();
        Ok(session)
    }

    /// Abandons the current run and starts a new one from ante 1.
    pub fn new_run(&mut self) {
        info!(
            "New run, previous run ended at ante {} blind {}",
            self.round.ante(),
            self.round.blind()
        );
        self.start_run();
    }

    /// Toggles the selection of the card at `index` and returns the hand type
    /// of the selection.
    pub fn select_card(&mut self, index: usize) -> Result<Option<HandType>, GameError> {
        self.check_playing()?;
        self.hand.select_card(index, &self.deck)?;
        Ok(self.hand.hand_type())
    }

    /// Plays the selected cards and adds their score to the blind.
    ///
    /// Reaching the blind target starts the next blind, running out of hands
    /// below the target ends the run. Returns `Ok(None)` if no card is
    /// selected.
    pub fn play_hand(&mut self) -> Result<Option<PlayedHand>, GameError> {
        self.check_playing()?;

        let Some(played) = self.hand.play_cards(&mut self.deck)? else {
            return Ok(None);
        };

        self.round.add_score(played.score);
        debug!(
            "Played {} for {}, blind score {}/{}",
            played.hand_type,
            played.score,
            self.round.score(),
            self.round.target()
        );

        self.events.push(GameEvent::HandScored {
            hand_type: played.hand_type,
            chips: played.chips,
            mult: played.mult,
            score: played.score,
            total: self.round.score(),
        });

        self.check_blind();
        Ok(Some(played))
    }

    /// Discards the selected cards, returns the number of discarded cards or
    /// `Ok(None)` if no card is selected.
    ///
    /// Discarding the last held cards with an empty deck ends the run.
    pub fn discard(&mut self) -> Result<Option<usize>, GameError> {
        self.check_playing()?;

        let discarded = self.hand.discard_cards(&mut self.deck)?;
        if let Some(count) = discarded {
            self.events.push(GameEvent::CardsDiscarded {
                count,
                discards_remaining: self.hand.discards_remaining(),
            });
            self.check_blind();
        }

        Ok(discarded)
    }

    /// Sorts the hand by rank.
    pub fn sort_by_rank(&mut self) {
        self.hand.sort_by_rank(&self.deck);
    }

    /// Sorts the hand by suit and rank.
    pub fn sort_by_suit(&mut self) {
        self.hand.sort_by_suit(&self.deck);
    }

    /// Takes the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterates the held cards in hand order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.cards().iter().map(|id| self.deck.card(*id))
    }

    /// The player hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The round state.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn start_run(&mut self) {
        self.round = Round::new();
        self.advance_blind();
        self.hand.sort_by_suit(&self.deck);
    }

    /// Starts the next blind, emitting a blind won event if the current blind
    /// target has been reached.
    fn advance_blind(&mut self) {
        if self.round.is_cleared() {
            info!(
                "Blind won at ante {} blind {} with {}/{}",
                self.round.ante(),
                self.round.blind(),
                self.round.score(),
                self.round.target()
            );

            self.events.push(GameEvent::BlindWon {
                ante: self.round.ante(),
                blind: self.round.blind(),
                score: self.round.score(),
                target: self.round.target(),
            });
        }

        match self.round.advance() {
            Some(target) => {
                self.deck.shuffle(&mut self.rng);
                self.hand.reset_for_next_blind(&mut self.deck);

                info!(
                    "Started ante {} blind {} with target {target}",
                    self.round.ante(),
                    self.round.blind()
                );

                self.events.push(GameEvent::BlindStarted {
                    ante: self.round.ante(),
                    blind: self.round.blind(),
                    target,
                });
            }
            None => {
                info!("Run won at ante {}", self.round.ante());
                self.events.push(GameEvent::RunWon {
                    ante: self.round.ante(),
                });
            }
        }
    }

    /// Starts the next blind if the target has been reached, ends the run if
    /// there are no hands left or no cards to play.
    fn check_blind(&mut self) {
        if self.round.is_cleared() {
            self.advance_blind();
        } else if self.hand.hands_remaining() == 0 || self.hand.size() == 0 {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        info!(
            "Game over at ante {} blind {} with {}/{}",
            self.round.ante(),
            self.round.blind(),
            self.round.score(),
            self.round.target()
        );

        self.round.lose();
        self.events.push(GameEvent::GameOver {
            ante: self.round.ante(),
            blind: self.round.blind(),
            score: self.round.score(),
            target: self.round.target(),
        });
    }

    fn check_playing(&self) -> Result<(), GameError> {
        match self.round.phase() {
            Phase::Playing => Ok(()),
            Phase::Lost | Phase::Won => Err(GameError::RunOver),
        }
    }
}
