// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Webaltro terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use webaltro_core::{Config, GameSession};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in hand.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(5..=8))]
    hand_size: u8,
    /// Hands that can be played in each blind.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    hands: u8,
    /// Discards available in each blind.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=10))]
    discards: u8,
    /// Seed for shuffling the deck.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Log game progress to stderr.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config {
        hand_size: cli.hand_size as usize,
        max_selected: Config::MAX_SELECTED,
        hands_per_blind: cli.hands as u32,
        discards_per_blind: cli.discards as u32,
        seed: cli.seed,
    };

    let session = GameSession::new(config)?;
    terminal::run(session)
}
