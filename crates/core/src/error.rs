// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use thiserror::Error;

/// Errors returned by game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// There is no card at this hand position.
    #[error("no card at index {0}")]
    CardIndex(usize),
    /// All hands for this blind have been played.
    #[error("no hands left")]
    NoHandsLeft,
    /// All discards for this blind have been used.
    #[error("no discards left")]
    NoDiscardsLeft,
    /// The run has ended, start a new one.
    #[error("the run is over")]
    RunOver,
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
