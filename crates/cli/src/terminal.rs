// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use std::{collections::VecDeque, io};

use webaltro_core::{Card, GameSession, Phase, Suit};

/// Number of messages shown under the hand.
const LOG_LINES: usize = 6;

/// Runs the terminal loop until the user quits.
pub fn run(mut session: GameSession) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = game_loop(&mut stdout, &mut session);

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

fn game_loop(w: &mut impl io::Write, session: &mut GameSession) -> Result<()> {
    let mut messages = VecDeque::with_capacity(LOG_LINES);

    loop {
        for event in session.take_events() {
            push_message(&mut messages, event.to_string());
        }

        print_game(w, session, &messages)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        let res = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char(c @ '1'..='8') => session
                .select_card(c as usize - '1' as usize)
                .map(|_| ()),
            KeyCode::Char('p') => session.play_hand().map(|_| ()),
            KeyCode::Char('d') => session.discard().map(|_| ()),
            KeyCode::Char('r') => {
                session.sort_by_rank();
                Ok(())
            }
            KeyCode::Char('s') => {
                session.sort_by_suit();
                Ok(())
            }
            KeyCode::Char('n') => {
                session.new_run();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = res {
            debug!("{e}");
            push_message(&mut messages, e.to_string());
        }
    }

    Ok(())
}

fn push_message(messages: &mut VecDeque<String>, msg: String) {
    if messages.len() == LOG_LINES {
        messages.pop_front();
    }
    messages.push_back(msg);
}

fn print_game(
    w: &mut impl io::Write,
    session: &GameSession,
    messages: &VecDeque<String>,
) -> Result<()> {
    execute!(w, Clear(ClearType::All))?;

    let round = session.round();
    let hand = session.hand();

    let status = format!(
        "Ante {}  Blind {}/3  Score {} / {}",
        round.ante(),
        round.blind(),
        round.score(),
        round.target()
    );
    queue!(
        w,
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(status.as_str().bold())
    )?;

    let counters = format!(
        "Hands {}  Discards {}  Deck {}",
        hand.hands_remaining(),
        hand.discards_remaining(),
        session.deck().size()
    );
    queue!(w, cursor::MoveTo(0, 1), style::Print(counters))?;

    let hand_type = match hand.hand_type() {
        Some(t) => format!("{:<16}{} x {}", t.name(), t.chips(), t.mult()),
        None => "---".to_string(),
    };
    queue!(
        w,
        cursor::MoveTo(0, 3),
        style::PrintStyledContent(hand_type.as_str().dark_green())
    )?;

    for (idx, card) in session.cards().enumerate() {
        print_card(w, card, idx, hand.is_selected(idx))?;
    }

    for (row, msg) in messages.iter().enumerate() {
        queue!(w, cursor::MoveTo(0, 9 + row as u16), style::Print(msg))?;
    }

    let help = match round.phase() {
        Phase::Playing => "1-8 select  p play  d discard  r sort rank  s sort suit  n new run  q quit",
        Phase::Lost | Phase::Won => "n new run  q quit",
    };
    queue!(
        w,
        cursor::MoveTo(0, 10 + LOG_LINES as u16),
        style::PrintStyledContent(help.dark_grey())
    )?;

    w.flush()?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, card: &Card, idx: usize, selected: bool) -> Result<()> {
    let col = idx as u16 * 6;

    queue!(
        w,
        cursor::MoveTo(col, 7),
        style::Print(format!("[{}]", idx + 1))
    )?;

    let label = format!(" {card} ");
    let label = match card.suit() {
        Suit::Hearts | Suit::Diamonds => label.as_str().red(),
        Suit::Spades | Suit::Clubs => label.as_str().white(),
    };
    let label = if selected { label.reverse() } else { label };

    // Selected cards are raised one row.
    let row = if selected { 5 } else { 6 };
    queue!(
        w,
        cursor::MoveTo(col, row),
        style::PrintStyledContent(label)
    )?;

    Ok(())
}
