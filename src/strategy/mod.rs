//! Pluggable decision making for players and the dealer.
//!
//! Every seat at the table owns one [`Strategy`]. The table consults it once
//! per round for a bet and repeatedly during the turn for an [`Action`].

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::StrategyError;
use crate::player::PlayerView;

mod dealer;
#[cfg(feature = "std")]
mod interactive;
mod scripted;

pub use dealer::Dealer;
#[cfg(feature = "std")]
pub use interactive::Interactive;
pub use scripted::Scripted;

/// A decision during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
        })
    }
}

impl FromStr for Action {
    type Err = StrategyError;

    /// Parses `hit`/`h` or `stand`/`s`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("hit") || token.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("stand") || token.eq_ignore_ascii_case("s") {
            Ok(Self::Stand)
        } else {
            Err(StrategyError::UnrecognizedAction(token.to_string()))
        }
    }
}

/// Decision hooks for one seat.
///
/// Implementations receive a read-only [`PlayerView`] of the acting seat.
/// Automated strategies should be free of side effects; interactive ones may
/// block on input.
pub trait Strategy: fmt::Debug {
    /// Chooses the next action for the current hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid action could be obtained.
    fn play(&mut self, view: &PlayerView<'_>) -> Result<Action, StrategyError>;

    /// Chooses the bet for the coming round.
    ///
    /// The table validates the amount according to its
    /// [`BetPolicy`](crate::BetPolicy).
    ///
    /// # Errors
    ///
    /// Returns an error if no bet could be obtained.
    fn bet(&mut self, view: &PlayerView<'_>) -> Result<i64, StrategyError>;
}
