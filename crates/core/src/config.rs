// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game configuration.
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Game session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of cards held in hand.
    pub hand_size: usize,
    /// Maximum number of cards that can be selected.
    pub max_selected: usize,
    /// Hands that can be played in each blind.
    pub hands_per_blind: u32,
    /// Discards available in each blind.
    pub discards_per_blind: u32,
    /// Seed for the deck shuffles, if not set uses OS randomness.
    pub seed: Option<u64>,
}

impl Config {
    /// Most cards a poker hand can have.
    pub const MAX_SELECTED: usize = 5;

    /// Checks the configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.hand_size == 0 || self.hand_size > webaltro_cards::Deck::SIZE {
            return Err(GameError::InvalidConfig("hand size must be in 1..=52"));
        }

        if self.max_selected == 0 || self.max_selected > Self::MAX_SELECTED {
            return Err(GameError::InvalidConfig("selected cards must be in 1..=5"));
        }

        if self.hands_per_blind == 0 {
            return Err(GameError::InvalidConfig("at least one hand per blind"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: 8,
            max_selected: Self::MAX_SELECTED,
            hands_per_blind: 4,
            discards_per_blind: 3,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn invalid_values() {
        let config = Config {
            hand_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = Config {
            max_selected: 6,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = Config {
            hands_per_blind: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
