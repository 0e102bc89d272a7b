extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;
use std::io::{BufRead, Write};

use crate::error::StrategyError;
use crate::player::PlayerView;

use super::{Action, Strategy};

/// A human at the keyboard, answering line-based prompts.
///
/// Invalid answers are re-prompted up to `max_attempts` times; after that the
/// last failure is returned.
pub struct Interactive<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Creates an interactive strategy that reads from `input` and prompts on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: 3,
        }
    }

    /// Sets how many answers are accepted before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    fn read_line(&mut self) -> Result<String, StrategyError> {
        self.output.flush().map_err(io_error)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(StrategyError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, StrategyError>,
    ) -> Result<T, StrategyError> {
        let mut attempts = 0;
        loop {
            writeln!(self.output, "{prompt}").map_err(io_error)?;
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempts += 1;
                    log::debug!("rejected answer {line:?}: {err}");
                    if attempts >= self.max_attempts {
                        return Err(err);
                    }
                    writeln!(self.output, "{err}").map_err(io_error)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for Interactive<R, W> {
    fn play(&mut self, view: &PlayerView<'_>) -> Result<Action, StrategyError> {
        if let Some(up) = view.dealer_up {
            writeln!(self.output, "Dealer shows {up}").map_err(io_error)?;
        }
        writeln!(self.output, "{} ({})", view.hand, view.hand.value()).map_err(io_error)?;
        self.ask("Would you like to 'hit' or 'stand'?", |line| {
            line.parse::<Action>()
        })
    }

    fn bet(&mut self, view: &PlayerView<'_>) -> Result<i64, StrategyError> {
        let prompt = alloc::format!("{}, how much would you like to bet?", view.name);
        self.ask(&prompt, |line| {
            line.parse::<i64>()
                .map_err(|_| StrategyError::UnparsableBet(line.to_string()))
        })
    }
}

impl<R, W> fmt::Debug for Interactive<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactive")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

fn io_error(err: std::io::Error) -> StrategyError {
    StrategyError::Input(err.to_string())
}
