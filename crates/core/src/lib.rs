// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Webaltro game core.
//!
//! A [GameSession] owns the deck, the player [Hand] and the [Round] state and
//! exposes the operations a presentation layer calls in response to user input:
//!
//! ```
//! # use webaltro_core::*;
//! let config = Config {
//!     seed: Some(7),
//!     ..Config::default()
//! };
//! let mut session = GameSession::new(config).unwrap();
//! assert_eq!(session.round().ante(), 1);
//!
//! session.select_card(0).unwrap();
//! let played = session.play_hand().unwrap().unwrap();
//! assert_eq!(session.round().score(), played.score);
//!
//! for event in session.take_events() {
//!     println!("{event}");
//! }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub use config::Config;
pub mod error;
pub use error::GameError;
pub mod event;
pub use event::GameEvent;
pub mod hand;
pub use hand::{Hand, PlayedHand};
pub mod round;
pub use round::{Phase, Round};
pub mod session;
pub use session::GameSession;

// Reexport cards and eval types.
pub use webaltro_cards::{Card, CardId, Deck, Rank, Suit};
pub use webaltro_eval::HandType;
