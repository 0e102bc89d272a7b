//! Repeated rounds with a textual report and an optional continue prompt.

extern crate alloc;

use alloc::string::String;
use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::error::SessionError;
use crate::hand::Hand;
use crate::outcome::RoundResult;
use crate::table::{Event, Observer, Table};

/// Drives a [`Table`] for many rounds, writing a report after each one.
///
/// Without a prompt input the session plays `max_rounds` rounds. With one,
/// it asks after every round whether to go on; answering `no` or closing the
/// input ends the session.
///
/// Turns are narrated as they happen (the dealer's hole card stays hidden
/// until the dealer plays) unless narration is switched off.
pub struct Session<R, W> {
    table: Table,
    prompt: Option<R>,
    output: W,
    max_rounds: u32,
    narrate: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reporting to `output`.
    pub fn new(table: Table, output: W) -> Self {
        let max_rounds = table.options().max_rounds;
        Self {
            table,
            prompt: None,
            output,
            max_rounds,
            narrate: true,
        }
    }

    /// Asks on `input` whether to continue after every round.
    #[must_use]
    pub fn with_prompt(mut self, input: R) -> Self {
        self.prompt = Some(input);
        self
    }

    /// Overrides the maximum number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Turns the turn-by-turn narration on or off. The end-of-round report is
    /// always written.
    #[must_use]
    pub fn with_narration(mut self, narrate: bool) -> Self {
        self.narrate = narrate;
        self
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Consumes the session and returns the table.
    #[must_use]
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Plays rounds until the limit is reached or the prompt says stop.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is abandoned or the output cannot be
    /// written.
    pub fn run(&mut self) -> Result<u32, SessionError> {
        writeln!(self.output, "Welcome to Blackjack!")?;

        let mut played = 0;
        while played < self.max_rounds {
            let result = self.play_round()?;
            played += 1;
            self.report(&result)?;

            if !self.keep_playing()? {
                break;
            }
        }

        log::info!("session over after {played} rounds");
        Ok(played)
    }

    fn play_round(&mut self) -> Result<RoundResult, SessionError> {
        if !self.narrate {
            return Ok(self.table.play_round()?);
        }

        let mut narrator = Narrator {
            output: &mut self.output,
            error: None,
        };
        let round = self.table.play_round_observed(&mut narrator);
        if let Some(err) = narrator.error {
            return Err(err.into());
        }
        Ok(round?)
    }

    fn report(&mut self, result: &RoundResult) -> Result<(), SessionError> {
        writeln!(self.output, "Game #{} over!", result.round)?;
        writeln!(
            self.output,
            "Dealer: {} {}",
            result.dealer_value,
            format_cards(&result.dealer_cards)
        )?;
        for player in &result.players {
            writeln!(
                self.output,
                "{} {}: {} {}",
                player.name,
                player.settlement.outcome,
                player.value,
                format_cards(&player.cards)
            )?;
        }
        writeln!(self.output)?;
        for player in self.table.players() {
            writeln!(self.output, "{player}")?;
        }
        Ok(())
    }

    fn keep_playing(&mut self) -> Result<bool, SessionError> {
        let Some(input) = self.prompt.as_mut() else {
            return Ok(true);
        };

        writeln!(self.output, "Would you like to play again? 'yes' or 'no'")?;
        self.output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(!line.trim().eq_ignore_ascii_case("no"))
    }
}

/// Writes table events as they happen. The first write error is kept and
/// later events are dropped.
struct Narrator<'a, W> {
    output: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write> Narrator<'_, W> {
    fn write(&mut self, event: &Event<'_>) -> io::Result<()> {
        match *event {
            Event::Dealt { dealer_up } => {
                writeln!(self.output)?;
                writeln!(self.output, "Dealer's hand: [{dealer_up}] [x]")?;
            }
            Event::Turn { name, hand, .. } => {
                writeln!(self.output)?;
                writeln!(self.output, "It's {name}'s turn")?;
                writeln!(self.output, "{hand}")?;
                writeln!(self.output, "{}", hand.value())?;
            }
            Event::Draw { hand, .. } => {
                writeln!(self.output, "{hand}")?;
                writeln!(self.output, "{}", hand.value())?;
            }
            Event::Bust { .. } => writeln!(self.output, "Bust!")?,
        }
        self.output.flush()
    }
}

impl<W: Write> Observer for Narrator<'_, W> {
    fn notify(&mut self, event: &Event<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write(event) {
            self.error = Some(err);
        }
    }
}

fn format_cards(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}
